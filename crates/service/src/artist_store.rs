use std::sync::Arc;

use models::{ArtistCollection, ArtistRecord};
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;
use crate::session::Session;
use crate::storage::KvStore;

/// Storage key holding the serialized `ArtistCollection`.
pub const ARTISTS_KEY: &str = "artists";

/// Durable access to artist records, scoped by the user carried in a [`Session`].
///
/// Every write goes through [`ArtistStore::update`]: load the whole collection,
/// mutate one record in memory, save the whole collection back. No lock is held
/// across those steps, so two overlapping updates resolve last-write-wins on the
/// entire collection.
#[derive(Clone)]
pub struct ArtistStore {
    kv: Arc<dyn KvStore>,
}

impl ArtistStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self { Self { kv } }

    pub fn kv(&self) -> &Arc<dyn KvStore> { &self.kv }

    /// Load every artist record.
    ///
    /// A missing blob, or one that does not parse as a collection, yields an empty
    /// collection. Only backend failures are returned as errors.
    pub async fn load_all(&self) -> Result<ArtistCollection, ServiceError> {
        let Some(raw) = self.kv.get(ARTISTS_KEY).await? else {
            return Ok(ArtistCollection::new());
        };
        match ArtistCollection::from_json(&raw) {
            Ok(all) => Ok(all),
            Err(e) => {
                warn!(error = %e, "stored artist collection is malformed; treating as empty");
                Ok(ArtistCollection::new())
            }
        }
    }

    /// Replace the stored collection with `all`.
    pub async fn save_all(&self, all: &ArtistCollection) -> Result<(), ServiceError> {
        let raw = all.to_json()?;
        self.kv.set(ARTISTS_KEY, raw).await?;
        debug!(artists = all.len(), "artist collection saved");
        Ok(())
    }

    pub fn current_user<'s>(&self, session: &'s Session) -> Option<&'s str> {
        session.user_id()
    }

    /// The current user's record, if there is a current user and a record for them.
    pub async fn get_record(&self, session: &Session) -> Result<Option<ArtistRecord>, ServiceError> {
        let Some(user) = self.current_user(session) else {
            return Ok(None);
        };
        let all = self.load_all().await?;
        let record = all.get(user).cloned();
        debug!(user, found = record.is_some(), "artist record read");
        Ok(record)
    }

    /// Apply `mutator` to the current user's record and persist the collection.
    ///
    /// Returns `Ok(None)` without writing anything when there is no current user or
    /// no record for them.
    #[instrument(skip_all, fields(user = session.user_id()))]
    pub async fn update<F, R>(&self, session: &Session, mutator: F) -> Result<Option<R>, ServiceError>
    where
        F: FnOnce(&mut ArtistRecord) -> R + Send,
        R: Send,
    {
        let Some(user) = self.current_user(session) else {
            debug!("update skipped: no current user");
            return Ok(None);
        };
        let mut all = self.load_all().await?;
        let Some(record) = all.get_mut(user) else {
            debug!("update skipped: no record for user");
            return Ok(None);
        };
        let out = mutator(record);
        self.save_all(&all).await?;
        info!("artist record updated");
        Ok(Some(out))
    }

    /// Insert a brand-new record for `user_id`. Only signup creates records.
    pub async fn create_record(&self, user_id: &str, record: ArtistRecord) -> Result<(), ServiceError> {
        let mut all = self.load_all().await?;
        if all.contains(user_id) {
            return Err(ServiceError::Conflict(format!("artist '{user_id}' already exists")));
        }
        all.insert(user_id, record);
        self.save_all(&all).await?;
        info!(user = user_id, "artist record created");
        Ok(())
    }

    pub async fn exists(&self, user_id: &str) -> Result<bool, ServiceError> {
        Ok(self.load_all().await?.contains(user_id))
    }
}
