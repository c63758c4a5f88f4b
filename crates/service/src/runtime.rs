//! Runtime environment helpers
//!
//! Builds the configured storage backend so binary crates only deal with
//! `service` types.

use std::sync::Arc;

use configs::{StorageBackend, StorageConfig};
use tracing::info;

use crate::storage::{FileKv, KvStore, MemoryKv};

/// Open the key-value backend described by `cfg`, creating the data directory if needed.
pub async fn open_kv(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    match cfg.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "artist data is not persisted across restarts");
            Ok(Arc::new(MemoryKv::new()))
        }
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.path).await?;
            let kv = FileKv::new(cfg.path.as_str()).await?;
            info!(backend = "file", path = %cfg.path, "artist data store opened");
            Ok(kv)
        }
    }
}
