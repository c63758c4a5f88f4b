use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Request failure rendered as `{"error": "..."}` with a matching status code.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// Body, query or path that axum could not extract.
    Rejected { status: StatusCode, message: String },
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self::Service(e) }
}

macro_rules! from_rejection {
    ($($rejection:ty),*) => {$(
        impl From<$rejection> for ApiError {
            fn from(r: $rejection) -> Self {
                Self::Rejected { status: r.status(), message: r.body_text() }
            }
        }
    )*};
}

from_rejection!(JsonRejection, QueryRejection, PathRejection);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(e) => match e {
                ServiceError::NoCurrentUser => StatusCode::UNAUTHORIZED,
                ServiceError::NoRecordForUser(_) => StatusCode::NOT_FOUND,
                ServiceError::MissingInput(_) => StatusCode::BAD_REQUEST,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::Storage(_) | ServiceError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            ApiError::Service(e) => {
                let user = match e {
                    ServiceError::NoRecordForUser(user) => Some(user.as_str()),
                    _ => None,
                };
                if status.is_server_error() {
                    error!(code = e.code(), error = %e, "request failed");
                } else {
                    warn!(code = e.code(), user, error = %e, "request rejected");
                }
                e.to_string()
            }
            ApiError::Rejected { message, .. } => {
                warn!(status = status.as_u16(), error = %message, "request not extractable");
                message.clone()
            }
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}
