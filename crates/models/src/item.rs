use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects which sequence of an artist record an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Artwork,
    Model,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Artwork => "artwork",
            ItemKind::Model => "model",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags_only() {
        assert_eq!(serde_json::from_str::<ItemKind>("\"artwork\"").unwrap(), ItemKind::Artwork);
        assert_eq!(serde_json::from_str::<ItemKind>("\"model\"").unwrap(), ItemKind::Model);
        assert!(serde_json::from_str::<ItemKind>("\"Model\"").is_err());
        assert!(serde_json::from_str::<ItemKind>("\"sculpture\"").is_err());
        assert_eq!(ItemKind::Model.to_string(), "model");
    }
}
