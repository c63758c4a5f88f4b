use serde::Serialize;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;
use crate::session::Session;
use super::require_record;

pub const UNNAMED_ARTIST: &str = "Unnamed Artist";
pub const NO_BIO: &str = "No biography available.";
pub const ARTIST_PIC_PLACEHOLDER: &str = "https://via.placeholder.com/200x200?text=Artist";

/// Public-facing page of the current artist.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Portfolio {
    pub display_name: String,
    pub bio: String,
    pub picture: String,
    /// Artwork images in upload order.
    pub images: Vec<String>,
}

#[derive(Clone)]
pub struct PortfolioView {
    store: ArtistStore,
}

impl PortfolioView {
    pub fn new(store: ArtistStore) -> Self { Self { store } }

    pub async fn load(&self, session: &Session) -> Result<Portfolio, ServiceError> {
        let record = require_record(&self.store, session).await?;
        let profile = record.profile;
        Ok(Portfolio {
            display_name: non_empty_or(profile.name, UNNAMED_ARTIST),
            bio: non_empty_or(profile.bio, NO_BIO),
            picture: profile.profile_pic.filter(|p| !p.is_empty())
                .unwrap_or_else(|| ARTIST_PIC_PLACEHOLDER.to_string()),
            images: record.artworks.into_iter().map(|a| a.img).collect(),
        })
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() { fallback.to_string() } else { value }
}
