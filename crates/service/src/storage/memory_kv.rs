use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use super::kv_store::KvStore;

/// Process-local key-value store; nothing survives a restart.
#[derive(Default)]
pub struct MemoryKv {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_kv_basic_crud() -> Result<(), anyhow::Error> {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("currentUser").await?, None);

        kv.set("currentUser", "alice".into()).await?;
        kv.set("currentUser", "bob".into()).await?;
        assert_eq!(kv.get("currentUser").await?.as_deref(), Some("bob"));

        assert!(kv.remove("currentUser").await?);
        assert!(!kv.remove("currentUser").await?);
        assert_eq!(kv.get("currentUser").await?, None);
        Ok(())
    }
}
