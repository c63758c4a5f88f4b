#![cfg(test)]
use std::sync::Arc;

use models::ArtistRecord;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;
use crate::storage::MemoryKv;

/// Store over a fresh in-memory backend.
pub fn memory_store() -> ArtistStore {
    ArtistStore::new(Arc::new(MemoryKv::new()))
}

/// Memory store holding one blank record for `user`, as signup leaves it.
pub async fn seeded_store(user: &str) -> Result<ArtistStore, ServiceError> {
    let store = memory_store();
    store.create_record(user, ArtistRecord::new("")).await?;
    Ok(store)
}
