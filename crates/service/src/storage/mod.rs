//! Storage abstractions for service layer
//!
//! `KvStore` is the string key/value seam; `MemoryKv` and `FileKv` implement it.
//! `JsonMapStore` is the reusable JSON-file map underneath `FileKv`.

pub mod json_map_store;
pub mod kv_store;
pub mod memory_kv;
pub mod file_kv;

pub use file_kv::FileKv;
pub use kv_store::KvStore;
pub use memory_kv::MemoryKv;
