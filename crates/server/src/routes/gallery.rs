use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use models::ItemKind;
use serde::{Deserialize, Serialize};
use service::services::{GalleryView, NewArtwork, NewModel};

use crate::errors::ApiError;
use crate::routes::profile::body_to_data_url;
use crate::state::{CurrentSession, ServerState};

/// Text fields sent alongside a raw image body.
#[derive(Deserialize, Debug, Default)]
pub struct ArtworkQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Serialize, Debug)]
pub struct Created {
    pub index: usize,
}

pub async fn list(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<GalleryView>, ApiError> {
    Ok(Json(state.gallery.list(&session).await?))
}

pub async fn add_artwork(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<ArtworkQuery>, QueryRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Query(q) = query?;
    let input = NewArtwork { image: body_to_data_url(&headers, &body), title: q.title, desc: q.desc };
    let index = state.gallery.add_artwork(&session, input).await?;
    Ok((StatusCode::CREATED, Json(Created { index })))
}

pub async fn add_model(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
    payload: Result<Json<NewModel>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Json(input) = payload?;
    let index = state.gallery.add_model(&session, input).await?;
    Ok((StatusCode::CREATED, Json(Created { index })))
}

/// `kind` must be `artwork` or `model`; anything else is a 400.
pub async fn delete_item(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
    path: Result<Path<(ItemKind, usize)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((kind, index)) = path?;
    let removed = state.gallery.delete(&session, kind, index).await?;
    Ok(if removed { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND })
}
