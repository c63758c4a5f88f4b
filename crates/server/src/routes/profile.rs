use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    Json,
};
use common::types::Ack;
use serde::Deserialize;
use service::data_url::DataUrl;
use service::services::ProfileForm;

use crate::errors::ApiError;
use crate::state::{CurrentSession, ServerState};

#[derive(Deserialize, Debug)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

/// Encode a raw upload body using its `Content-Type`; `None` for an empty body.
pub(crate) fn body_to_data_url(headers: &HeaderMap, body: &Bytes) -> Option<DataUrl> {
    let mime = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    DataUrl::encode(mime, body)
}

pub async fn get_profile(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<ProfileForm>, ApiError> {
    Ok(Json(state.profile.load_profile(&session).await?))
}

pub async fn put_profile(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(input) = payload?;
    state.profile.save_profile(&session, input.name, input.bio).await?;
    Ok(Json(Ack::OK))
}

pub async fn put_picture(
    State(state): State<ServerState>,
    CurrentSession(session): CurrentSession,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Ack>, ApiError> {
    state.profile.save_profile_pic(&session, body_to_data_url(&headers, &body)).await?;
    Ok(Json(Ack::OK))
}
