use axum::{extract::State, Json};
use service::services::{ArItem, Portfolio};

use crate::errors::ApiError;
use crate::state::{CurrentSession, ServerState};

pub async fn portfolio(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Portfolio>, ApiError> {
    Ok(Json(state.portfolio.load(&session).await?))
}

/// `null` when the artist has no artworks.
pub async fn ar_current(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Option<ArItem>>, ApiError> {
    Ok(Json(state.ar.current(&session).await?))
}

pub async fn ar_next(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Option<ArItem>>, ApiError> {
    Ok(Json(state.ar.next(&session).await?))
}

pub async fn ar_prev(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Option<ArItem>>, ApiError> {
    Ok(Json(state.ar.prev(&session).await?))
}
