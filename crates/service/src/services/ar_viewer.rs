use dashmap::DashMap;
use models::Artwork;
use serde::Serialize;
use tracing::debug;

use crate::artist_store::ArtistStore;
use crate::errors::ServiceError;
use crate::session::Session;
use super::require_record;

pub const UNTITLED: &str = "(Untitled)";

/// Position in an artworks sequence, wrapping in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArCursor {
    index: usize,
}

impl ArCursor {
    pub fn at(index: usize) -> Self { Self { index } }

    pub fn index(&self) -> usize { self.index }

    /// Step forward; no-op on an empty sequence.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + 1) % len;
    }

    /// Step back; no-op on an empty sequence.
    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + len - 1) % len;
    }

    /// Index clamped into a sequence of `len` items (which may have shrunk).
    pub fn resolve(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index % len)
    }
}

/// The artwork currently placed in the AR scene.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ArItem {
    pub index: usize,
    pub total: usize,
    pub img: String,
    pub title: String,
    pub desc: String,
}

impl ArItem {
    fn from_artwork(index: usize, total: usize, art: &Artwork) -> Self {
        Self {
            index,
            total,
            img: art.img.clone(),
            title: if art.title.is_empty() { UNTITLED.to_string() } else { art.title.clone() },
            desc: art.desc.clone(),
        }
    }
}

#[derive(Clone, Copy)]
enum Step {
    Stay,
    Next,
    Prev,
}

/// AR viewer over the current artist's artworks, one cursor per user.
pub struct ArViewer {
    store: ArtistStore,
    cursors: DashMap<String, ArCursor>,
}

impl ArViewer {
    pub fn new(store: ArtistStore) -> Self {
        Self { store, cursors: DashMap::new() }
    }

    /// Artwork under the cursor; `None` when the artist has no artworks.
    pub async fn current(&self, session: &Session) -> Result<Option<ArItem>, ServiceError> {
        self.step(session, Step::Stay).await
    }

    pub async fn next(&self, session: &Session) -> Result<Option<ArItem>, ServiceError> {
        self.step(session, Step::Next).await
    }

    pub async fn prev(&self, session: &Session) -> Result<Option<ArItem>, ServiceError> {
        self.step(session, Step::Prev).await
    }

    async fn step(&self, session: &Session, step: Step) -> Result<Option<ArItem>, ServiceError> {
        let record = require_record(&self.store, session).await?;
        let user = session.user_id().ok_or(ServiceError::NoCurrentUser)?;
        let artworks = record.artworks;
        let len = artworks.len();

        let mut cursor = self.cursors.entry(user.to_string()).or_default();
        match step {
            Step::Stay => {}
            Step::Next => cursor.advance(len),
            Step::Prev => cursor.retreat(len),
        }
        let Some(index) = cursor.resolve(len) else {
            return Ok(None);
        };
        *cursor = ArCursor::at(index);
        drop(cursor);

        debug!(user, index, total = len, "ar viewer positioned");
        Ok(Some(ArItem::from_artwork(index, len, &artworks[index])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_store;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut c = ArCursor::at(2);
        c.advance(3);
        assert_eq!(c.index(), 0);
        c.retreat(3);
        assert_eq!(c.index(), 2);
        c.retreat(3);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn cursor_ignores_empty_sequence() {
        let mut c = ArCursor::default();
        c.advance(0);
        c.retreat(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.resolve(0), None);
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = ArCursor::default();
        c.advance(1);
        assert_eq!(c.index(), 0);
        c.retreat(1);
        assert_eq!(c.index(), 0);
    }

    async fn viewer_with(titles: &[&str]) -> Result<(ArViewer, Session), anyhow::Error> {
        let store = seeded_store("alice").await?;
        let s = Session::for_user("alice");
        let arts: Vec<Artwork> = titles.iter().map(|t| Artwork {
            img: format!("data:image/png;base64,{t}"),
            title: t.to_string(),
            desc: String::new(),
        }).collect();
        store.update(&s, move |r| r.artworks = arts).await?;
        Ok((ArViewer::new(store), s))
    }

    #[tokio::test]
    async fn next_and_prev_wrap_around() -> Result<(), anyhow::Error> {
        let (v, s) = viewer_with(&["a", "b", "c"]).await?;
        assert_eq!(v.current(&s).await?.map(|i| i.index), Some(0));
        assert_eq!(v.prev(&s).await?.map(|i| i.index), Some(2));
        assert_eq!(v.next(&s).await?.map(|i| i.index), Some(0));
        assert_eq!(v.next(&s).await?.map(|i| i.title), Some("b".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn empty_gallery_has_nothing_to_show() -> Result<(), anyhow::Error> {
        let (v, s) = viewer_with(&[]).await?;
        assert_eq!(v.current(&s).await?, None);
        assert_eq!(v.next(&s).await?, None);
        assert_eq!(v.prev(&s).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn untitled_artwork_gets_placeholder_title() -> Result<(), anyhow::Error> {
        let (v, s) = viewer_with(&[""]).await?;
        let item = v.current(&s).await?.expect("item");
        assert_eq!(item.title, UNTITLED);
        assert_eq!(item.total, 1);
        Ok(())
    }

    #[tokio::test]
    async fn cursor_past_end_after_delete_wraps() -> Result<(), anyhow::Error> {
        let (v, s) = viewer_with(&["a", "b", "c"]).await?;
        v.prev(&s).await?; // index 2
        v.store.update(&s, |r| r.artworks.truncate(2)).await?;
        let item = v.current(&s).await?.expect("item");
        assert_eq!(item.index, 0);
        assert_eq!(item.total, 2);
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_viewer_is_refused() -> Result<(), anyhow::Error> {
        let (v, _) = viewer_with(&["a"]).await?;
        assert!(matches!(v.next(&Session::anonymous()).await, Err(ServiceError::NoCurrentUser)));
        Ok(())
    }
}
