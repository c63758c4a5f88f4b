use thiserror::Error;

use crate::session::Session;

/// Failures surfaced to callers of the artist services.
///
/// The `Display` text of the first three variants is the notice shown to the user;
/// a missing record reads the same as a missing login.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No artist logged in!")]
    NoCurrentUser,
    #[error("No artist logged in!")]
    NoRecordForUser(String),
    #[error("{0}")]
    MissingInput(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn missing(what: &str) -> Self { Self::MissingInput(what.to_string()) }

    /// Error for an operation that found no record to act on in `session`.
    pub fn no_record(session: &Session) -> Self {
        match session.user_id() {
            Some(user) => Self::NoRecordForUser(user.to_string()),
            None => Self::NoCurrentUser,
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NoCurrentUser => 2001,
            ServiceError::NoRecordForUser(_) => 2002,
            ServiceError::MissingInput(_) => 2003,
            ServiceError::Conflict(_) => 2004,
            ServiceError::Storage(_) => 2100,
            ServiceError::Model(_) => 2101,
        }
    }
}
