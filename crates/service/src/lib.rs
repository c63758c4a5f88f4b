//! Service layer for the artist portfolio.
//! - `storage`: key-value backends (memory and JSON file) behind `KvStore`.
//! - `artist_store`: load/save/update of the per-user artist collection.
//! - `session`, `accounts`: current-user handling and signup.
//! - `services`: profile, gallery, portfolio and AR viewer operations.

pub mod errors;
pub mod storage;
pub mod artist_store;
pub mod session;
pub mod accounts;
pub mod data_url;
pub mod services;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
