use models::{Artwork, ItemKind, Model3d};
use serde::Serialize;
use tracing::{debug, info};

use crate::artist_store::ArtistStore;
use crate::data_url::DataUrl;
use crate::errors::ServiceError;
use crate::session::Session;
use super::{require_record, require_update};

/// Upload form for a 2D artwork.
#[derive(Clone, Debug, Default)]
pub struct NewArtwork {
    pub image: Option<DataUrl>,
    pub title: String,
    pub desc: String,
}

/// Upload form for 3D model metadata.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NewModel {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub name: String,
}

/// One gallery card; `index` and `kind` address it for deletion.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GalleryEntry<T> {
    pub index: usize,
    pub kind: ItemKind,
    #[serde(flatten)]
    pub item: T,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GalleryView {
    pub artworks: Vec<GalleryEntry<Artwork>>,
    pub models: Vec<GalleryEntry<Model3d>>,
}

/// The artist's own gallery: list, upload and delete.
#[derive(Clone)]
pub struct ArtworkGallery {
    store: ArtistStore,
}

impl ArtworkGallery {
    pub fn new(store: ArtistStore) -> Self { Self { store } }

    pub async fn list(&self, session: &Session) -> Result<GalleryView, ServiceError> {
        let record = require_record(&self.store, session).await?;
        let artworks = record.artworks.into_iter().enumerate()
            .map(|(index, item)| GalleryEntry { index, kind: ItemKind::Artwork, item })
            .collect();
        let models = record.models.into_iter().enumerate()
            .map(|(index, item)| GalleryEntry { index, kind: ItemKind::Model, item })
            .collect();
        Ok(GalleryView { artworks, models })
    }

    /// Append an artwork; returns its index.
    pub async fn add_artwork(&self, session: &Session, input: NewArtwork) -> Result<usize, ServiceError> {
        let image = input.image.ok_or_else(|| ServiceError::missing("Select an artwork first!"))?;
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ServiceError::missing("Enter artwork title!"));
        }
        let mime = image.mime().to_string();
        let artwork = Artwork { img: image.into_string(), title, desc: input.desc.trim().to_string() };
        let index = require_update(&self.store, session, move |artist| {
            artist.artworks.push(artwork);
            artist.artworks.len() - 1
        })
        .await?;
        info!(user = session.user_id(), index, %mime, "artwork added");
        Ok(index)
    }

    /// Append 3D model metadata; returns its index.
    pub async fn add_model(&self, session: &Session, input: NewModel) -> Result<usize, ServiceError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::missing("Select a 3D model first!"));
        }
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ServiceError::missing("Enter model title!"));
        }
        let model = Model3d { title, desc: input.desc.trim().to_string(), name };
        let index = require_update(&self.store, session, move |artist| {
            artist.models.push(model);
            artist.models.len() - 1
        })
        .await?;
        info!(user = session.user_id(), index, "model added");
        Ok(index)
    }

    /// Delete the entry at `index` of the `kind` sequence.
    /// Returns false, writing the unchanged collection back, when `index` is out of range.
    pub async fn delete(&self, session: &Session, kind: ItemKind, index: usize) -> Result<bool, ServiceError> {
        let removed = require_update(&self.store, session, move |artist| artist.remove_item(kind, index)).await?;
        if removed {
            info!(user = session.user_id(), %kind, index, "gallery item deleted");
        } else {
            debug!(user = session.user_id(), %kind, index, "delete ignored: index out of range");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist_store::ARTISTS_KEY;
    use crate::test_support::seeded_store;

    fn upload(title: &str) -> NewArtwork {
        NewArtwork {
            image: DataUrl::encode(Some("image/png"), title.as_bytes()),
            title: title.to_string(),
            desc: format!("  about {title}  "),
        }
    }

    async fn gallery() -> Result<(ArtworkGallery, Session), anyhow::Error> {
        Ok((ArtworkGallery::new(seeded_store("alice").await?), Session::for_user("alice")))
    }

    #[tokio::test]
    async fn n_uploads_give_n_artworks() -> Result<(), anyhow::Error> {
        let (g, s) = gallery().await?;
        for (i, t) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(g.add_artwork(&s, upload(t)).await?, i);
        }
        let view = g.list(&s).await?;
        assert_eq!(view.artworks.len(), 3);
        assert_eq!(view.artworks[2].index, 2);
        assert_eq!(view.artworks[2].item.desc, "about c");
        assert!(view.models.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_inputs_are_rejected_before_writing() -> Result<(), anyhow::Error> {
        let (g, s) = gallery().await?;
        let before = g.store.kv().get(ARTISTS_KEY).await?;

        let no_file = NewArtwork { image: None, title: "t".into(), desc: String::new() };
        assert_eq!(g.add_artwork(&s, no_file).await.unwrap_err().to_string(), "Select an artwork first!");
        let blank_title = NewArtwork { title: "   ".into(), ..upload("x") };
        assert_eq!(g.add_artwork(&s, blank_title).await.unwrap_err().to_string(), "Enter artwork title!");
        let no_name = NewModel { title: "Chair".into(), desc: String::new(), name: " ".into() };
        assert!(matches!(g.add_model(&s, no_name).await, Err(ServiceError::MissingInput(_))));

        assert_eq!(g.store.kv().get(ARTISTS_KEY).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn delete_selects_sequence_by_kind() -> Result<(), anyhow::Error> {
        let (g, s) = gallery().await?;
        for t in ["one", "two", "three"] {
            g.add_artwork(&s, upload(t)).await?;
        }
        g.add_model(&s, NewModel { title: "Chair".into(), desc: "oak".into(), name: "chair.glb".into() }).await?;

        assert!(g.delete(&s, ItemKind::Artwork, 0).await?);
        let view = g.list(&s).await?;
        let titles: Vec<_> = view.artworks.iter().map(|e| e.item.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert_eq!(view.models.len(), 1);

        assert!(g.delete(&s, ItemKind::Model, 0).await?);
        assert!(!g.delete(&s, ItemKind::Model, 0).await?);
        let view = g.list(&s).await?;
        assert!(view.models.is_empty());
        assert_eq!(view.artworks.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn gallery_entry_serializes_flat() -> Result<(), anyhow::Error> {
        let (g, s) = gallery().await?;
        g.add_model(&s, NewModel { title: "Vase".into(), desc: String::new(), name: "vase.obj".into() }).await?;
        let json = serde_json::to_value(g.list(&s).await?)?;
        assert_eq!(json["models"][0]["kind"], "model");
        assert_eq!(json["models"][0]["name"], "vase.obj");
        assert_eq!(json["models"][0]["index"], 0);
        Ok(())
    }
}
