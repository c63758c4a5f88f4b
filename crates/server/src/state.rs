use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use service::artist_store::ArtistStore;
use service::services::{ArViewer, ArtworkGallery, PortfolioView, ProfileView};
use service::session::{Session, SessionStore};
use service::storage::KvStore;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub artists: ArtistStore,
    pub sessions: SessionStore,
    pub profile: ProfileView,
    pub gallery: ArtworkGallery,
    pub portfolio: PortfolioView,
    pub ar: Arc<ArViewer>,
}

impl ServerState {
    /// Wire every service onto one key-value backend.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        let artists = ArtistStore::new(kv);
        Self {
            sessions: SessionStore::new(artists.clone()),
            profile: ProfileView::new(artists.clone()),
            gallery: ArtworkGallery::new(artists.clone()),
            portfolio: PortfolioView::new(artists.clone()),
            ar: Arc::new(ArViewer::new(artists.clone())),
            artists,
        }
    }
}

/// The stored current user, read once per request.
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<ServerState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        Ok(CurrentSession(state.sessions.current().await?))
    }
}
