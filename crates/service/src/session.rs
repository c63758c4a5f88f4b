use std::sync::Arc;

use tracing::info;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;
use crate::storage::KvStore;

/// Storage key holding the id of the logged-in artist.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Who the current request acts for. Passed explicitly to every operation
/// that reads or writes the current user's record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self { Self { user_id: None } }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()) }
    }

    pub fn user_id(&self) -> Option<&str> { self.user_id.as_deref() }
}

/// Persists the current user under [`CURRENT_USER_KEY`].
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KvStore>,
    artists: ArtistStore,
}

impl SessionStore {
    pub fn new(artists: ArtistStore) -> Self {
        Self { kv: Arc::clone(artists.kv()), artists }
    }

    /// Session for the stored current user; anonymous when unset or blank.
    pub async fn current(&self) -> Result<Session, ServiceError> {
        let user = self.kv.get(CURRENT_USER_KEY).await?;
        Ok(match user {
            Some(id) if !id.trim().is_empty() => Session::for_user(id),
            _ => Session::anonymous(),
        })
    }

    /// Make `user_id` the current user. The artist must already have signed up.
    pub async fn login(&self, user_id: &str) -> Result<Session, ServiceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ServiceError::missing("Enter a user id!"));
        }
        if !self.artists.exists(user_id).await? {
            return Err(ServiceError::NoRecordForUser(user_id.to_string()));
        }
        self.kv.set(CURRENT_USER_KEY, user_id.to_string()).await?;
        info!(user = user_id, "artist logged in");
        Ok(Session::for_user(user_id))
    }

    /// Clear the current user; returns whether someone was logged in.
    pub async fn logout(&self) -> Result<bool, ServiceError> {
        let was = self.kv.remove(CURRENT_USER_KEY).await?;
        if was {
            info!("artist logged out");
        }
        Ok(was)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_store, seeded_store};

    #[tokio::test]
    async fn current_is_anonymous_until_login() -> Result<(), anyhow::Error> {
        let sessions = SessionStore::new(seeded_store("alice").await?);
        assert!(sessions.current().await? == Session::anonymous());

        let s = sessions.login(" alice ").await?;
        assert_eq!(s.user_id(), Some("alice"));
        assert_eq!(sessions.current().await?, Session::for_user("alice"));

        assert!(sessions.logout().await?);
        assert!(sessions.current().await? == Session::anonymous());
        assert!(!sessions.logout().await?);
        Ok(())
    }

    #[tokio::test]
    async fn login_requires_existing_record() -> Result<(), anyhow::Error> {
        let sessions = SessionStore::new(memory_store());
        let err = sessions.login("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoRecordForUser(_)));
        assert!(matches!(sessions.login("  ").await, Err(ServiceError::MissingInput(_))));
        assert!(sessions.current().await? == Session::anonymous());
        Ok(())
    }

    #[tokio::test]
    async fn blank_stored_user_is_anonymous() -> Result<(), anyhow::Error> {
        let store = memory_store();
        store.kv().set(CURRENT_USER_KEY, "".into()).await?;
        let sessions = SessionStore::new(store);
        assert!(sessions.current().await? == Session::anonymous());
        Ok(())
    }
}
