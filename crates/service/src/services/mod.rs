//! User-facing operations built on `ArtistStore`.
//!
//! Each service turns "no current user" / "no record" into a `ServiceError`
//! notice instead of the silent no-op the store itself performs.

pub mod profile;
pub mod gallery;
pub mod portfolio;
pub mod ar_viewer;

use models::ArtistRecord;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;
use crate::session::Session;

pub use ar_viewer::{ArCursor, ArItem, ArViewer};
pub use gallery::{ArtworkGallery, GalleryView, NewArtwork, NewModel};
pub use portfolio::{Portfolio, PortfolioView};
pub use profile::{ProfileForm, ProfileView};

/// Record of the session's user, or the notice explaining why there is none.
pub(crate) async fn require_record(store: &ArtistStore, session: &Session) -> Result<ArtistRecord, ServiceError> {
    store
        .get_record(session)
        .await?
        .ok_or_else(|| ServiceError::no_record(session))
}

/// Run `mutator` through `ArtistStore::update`, mapping a skipped update to a notice.
pub(crate) async fn require_update<F, R>(store: &ArtistStore, session: &Session, mutator: F) -> Result<R, ServiceError>
where
    F: FnOnce(&mut ArtistRecord) -> R + Send,
    R: Send,
{
    store
        .update(session, mutator)
        .await?
        .ok_or_else(|| ServiceError::no_record(session))
}
