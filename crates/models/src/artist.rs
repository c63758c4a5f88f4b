use serde::{Deserialize, Serialize};

use crate::item::ItemKind;

/// Editable profile fields of an artist.
/// - `profile_pic`: data URL of the uploaded picture, stored as `profilePic`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "profilePic", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// A 2D artwork; `img` is the image inlined as a data URL.
/// Every field defaults so one incomplete entry cannot make the whole collection unreadable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// Metadata of an uploaded 3D model. `name` is the model file name.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Model3d {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub name: String,
}

/// Everything stored for one user.
///
/// `artworks` and `models` may be absent in older blobs; they load as empty
/// sequences and are always written back.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistRecord {
    pub profile: Profile,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub models: Vec<Model3d>,
}

impl ArtistRecord {
    /// Seed record created at signup.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: Profile { name: name.into(), ..Profile::default() },
            artworks: Vec::new(),
            models: Vec::new(),
        }
    }

    /// Number of entries in the sequence selected by `kind`.
    pub fn len_of(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Artwork => self.artworks.len(),
            ItemKind::Model => self.models.len(),
        }
    }

    /// Remove the entry at `index` from the sequence selected by `kind`.
    /// Returns false and leaves the record untouched when `index` is out of range.
    pub fn remove_item(&mut self, kind: ItemKind, index: usize) -> bool {
        if index >= self.len_of(kind) {
            return false;
        }
        match kind {
            ItemKind::Artwork => { self.artworks.remove(index); }
            ItemKind::Model => { self.models.remove(index); }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(title: &str) -> Artwork {
        Artwork { img: format!("data:image/png;base64,{title}"), title: title.into(), desc: String::new() }
    }

    #[test]
    fn missing_sequences_load_as_empty() {
        let rec: ArtistRecord = serde_json::from_str(r#"{"profile":{"name":"","bio":""}}"#).unwrap();
        assert!(rec.artworks.is_empty());
        assert!(rec.models.is_empty());
        assert_eq!(rec.profile.profile_pic, None);
    }

    #[test]
    fn incomplete_entries_still_load() {
        let rec: ArtistRecord = serde_json::from_str(
            r#"{"profile":{"name":"A"},"artworks":[{"title":"no image"}],"models":[{}]}"#,
        ).unwrap();
        assert_eq!(rec.artworks[0].title, "no image");
        assert_eq!(rec.artworks[0].img, "");
        assert_eq!(rec.models[0], Model3d::default());
    }

    #[test]
    fn profile_pic_uses_camel_case_key() {
        let mut rec = ArtistRecord::new("Alice");
        rec.profile.profile_pic = Some("data:image/png;base64,AAAA".into());
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["profile"]["profilePic"], "data:image/png;base64,AAAA");
        assert_eq!(json["artworks"], serde_json::json!([]));
    }

    #[test]
    fn remove_item_preserves_order_of_the_rest() {
        let mut rec = ArtistRecord::new("a");
        rec.artworks = vec![art("one"), art("two"), art("three")];
        assert!(rec.remove_item(ItemKind::Artwork, 1));
        let titles: Vec<_> = rec.artworks.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "three"]);
    }

    #[test]
    fn remove_item_out_of_range_is_noop() {
        let mut rec = ArtistRecord::new("a");
        rec.models.push(Model3d { title: "t".into(), desc: "d".into(), name: "chair.glb".into() });
        let before = rec.clone();
        assert!(!rec.remove_item(ItemKind::Model, 1));
        assert!(!rec.remove_item(ItemKind::Artwork, 0));
        assert_eq!(rec, before);
    }
}
