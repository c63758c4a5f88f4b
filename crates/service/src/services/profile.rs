use serde::Serialize;
use tracing::info;

use crate::artist_store::ArtistStore;
use crate::data_url::DataUrl;
use crate::errors::ServiceError;
use crate::session::Session;
use super::{require_record, require_update};

/// Shown in the profile editor until a picture is uploaded.
pub const PROFILE_PIC_PLACEHOLDER: &str = "https://via.placeholder.com/200x200?text=Profile+Pic";

/// Editable profile fields as the editor shows them.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub profile_pic: String,
}

/// Profile editor: reads the current artist's fields and persists edits.
#[derive(Clone)]
pub struct ProfileView {
    store: ArtistStore,
}

impl ProfileView {
    pub fn new(store: ArtistStore) -> Self { Self { store } }

    pub async fn load_profile(&self, session: &Session) -> Result<ProfileForm, ServiceError> {
        let profile = require_record(&self.store, session).await?.profile;
        Ok(ProfileForm {
            name: profile.name,
            bio: profile.bio,
            profile_pic: profile
                .profile_pic
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| PROFILE_PIC_PLACEHOLDER.to_string()),
        })
    }

    pub async fn save_profile(&self, session: &Session, name: String, bio: String) -> Result<(), ServiceError> {
        require_update(&self.store, session, move |artist| {
            artist.profile.name = name;
            artist.profile.bio = bio;
        })
        .await?;
        info!(user = session.user_id(), "profile saved");
        Ok(())
    }

    /// Replace the profile picture. `None` means no file was chosen; nothing is written.
    pub async fn save_profile_pic(&self, session: &Session, image: Option<DataUrl>) -> Result<(), ServiceError> {
        let image = image.ok_or_else(|| ServiceError::missing("Please choose an image first!"))?;
        let mime = image.mime().to_string();
        require_update(&self.store, session, move |artist| {
            artist.profile.profile_pic = Some(image.into_string());
        })
        .await?;
        info!(user = session.user_id(), %mime, "profile picture updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist_store::ARTISTS_KEY;
    use crate::test_support::seeded_store;

    #[tokio::test]
    async fn load_falls_back_to_placeholder() -> Result<(), anyhow::Error> {
        let view = ProfileView::new(seeded_store("alice").await?);
        let form = view.load_profile(&Session::for_user("alice")).await?;
        assert_eq!(form.name, "");
        assert_eq!(form.profile_pic, PROFILE_PIC_PLACEHOLDER);
        Ok(())
    }

    #[tokio::test]
    async fn empty_stored_picture_shows_placeholder() -> Result<(), anyhow::Error> {
        let store = seeded_store("alice").await?;
        let session = Session::for_user("alice");
        store.update(&session, |r| r.profile.profile_pic = Some(String::new())).await?;

        let form = ProfileView::new(store).load_profile(&session).await?;
        assert_eq!(form.profile_pic, PROFILE_PIC_PLACEHOLDER);
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load() -> Result<(), anyhow::Error> {
        let view = ProfileView::new(seeded_store("alice").await?);
        let session = Session::for_user("alice");
        view.save_profile(&session, "Alice".into(), "Paints birds.".into()).await?;
        let pic = DataUrl::encode(Some("image/png"), b"png-bytes");
        view.save_profile_pic(&session, pic.clone()).await?;

        let form = view.load_profile(&session).await?;
        assert_eq!(form.name, "Alice");
        assert_eq!(form.bio, "Paints birds.");
        assert_eq!(Some(form.profile_pic), pic.map(DataUrl::into_string));
        Ok(())
    }

    #[tokio::test]
    async fn missing_picture_mutates_nothing() -> Result<(), anyhow::Error> {
        let store = seeded_store("alice").await?;
        let before = store.kv().get(ARTISTS_KEY).await?;
        let view = ProfileView::new(store.clone());

        let err = view.save_profile_pic(&Session::for_user("alice"), None).await.unwrap_err();
        assert_eq!(err.to_string(), "Please choose an image first!");
        assert_eq!(store.kv().get(ARTISTS_KEY).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_session_gets_notice() -> Result<(), anyhow::Error> {
        let view = ProfileView::new(seeded_store("alice").await?);
        let anon = Session::anonymous();
        assert!(matches!(view.load_profile(&anon).await, Err(ServiceError::NoCurrentUser)));
        assert!(matches!(
            view.save_profile(&anon, "x".into(), "y".into()).await,
            Err(ServiceError::NoCurrentUser)
        ));
        assert!(matches!(
            view.save_profile(&Session::for_user("bob"), "x".into(), "y".into()).await,
            Err(ServiceError::NoRecordForUser(_))
        ));
        Ok(())
    }
}
