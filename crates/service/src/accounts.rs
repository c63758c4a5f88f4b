use models::ArtistRecord;
use tracing::instrument;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;

/// Create the blank record a new artist starts from.
///
/// The record holds `name` and an empty bio, artworks and models. Fails with
/// `Conflict` when `user_id` is taken.
#[instrument(skip(store))]
pub async fn signup(store: &ArtistStore, user_id: &str, name: &str) -> Result<(), ServiceError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(ServiceError::missing("Enter a user id!"));
    }
    store.create_record(user_id, ArtistRecord::new(name.trim())).await
}
