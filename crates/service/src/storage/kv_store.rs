use crate::errors::ServiceError;
use async_trait::async_trait;

/// Trait abstraction for string key-value storage.
/// Implementations can be in-memory, file-backed, or remote KV.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError>;
    /// Delete `key`; returns whether it existed.
    async fn remove(&self, key: &str) -> Result<bool, ServiceError>;
}
