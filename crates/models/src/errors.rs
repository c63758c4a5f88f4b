use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
