use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ServiceError;
use super::json_map_store::JsonMapStore;
use super::kv_store::KvStore;

/// File-backed key-value store.
/// Keeps every key in one JSON object on disk, values stored as strings.
#[derive(Clone)]
pub struct FileKv {
    store: Arc<JsonMapStore<String, String>>,
}

impl FileKv {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, String>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl KvStore for FileKv {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.store.get(&key.to_string()).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.store.insert(key.to_string(), value).await
    }

    async fn remove(&self, key: &str) -> Result<bool, ServiceError> {
        self.store.remove(&key.to_string()).await
    }
}
