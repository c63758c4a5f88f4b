use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::artist::ArtistRecord;
use crate::errors::ModelError;

/// All artist records keyed by user id, persisted as one JSON object.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ArtistCollection {
    records: HashMap<String, ArtistRecord>,
}

impl ArtistCollection {
    pub fn new() -> Self { Self::default() }

    pub fn from_json(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, user_id: &str) -> Option<&ArtistRecord> {
        self.records.get(user_id)
    }

    pub fn get_mut(&mut self, user_id: &str) -> Option<&mut ArtistRecord> {
        self.records.get_mut(user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.records.contains_key(user_id)
    }

    /// Insert or replace the record for `user_id`, returning the previous one.
    pub fn insert(&mut self, user_id: impl Into<String>, record: ArtistRecord) -> Option<ArtistRecord> {
        self.records.insert(user_id.into(), record)
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Artwork;

    #[test]
    fn json_round_trip_keeps_every_record() {
        let mut c = ArtistCollection::new();
        let mut alice = ArtistRecord::new("Alice");
        alice.artworks.push(Artwork { img: "data:image/png;base64,AA==".into(), title: "Dawn".into(), desc: "oil".into() });
        c.insert("alice", alice);
        c.insert("bob", ArtistRecord::new("Bob"));

        let back = ArtistCollection::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn top_level_is_a_plain_object() {
        let c = ArtistCollection::from_json(r#"{"alice":{"profile":{"name":"A","bio":""},"artworks":[]}}"#).unwrap();
        assert!(c.contains("alice"));
        assert!(ArtistCollection::from_json("[]").is_err());
    }
}
