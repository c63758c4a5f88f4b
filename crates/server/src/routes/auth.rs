use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use common::types::Ack;
use serde::{Deserialize, Serialize};
use service::accounts;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Deserialize, Debug)]
pub struct SignupInput {
    pub user_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginInput {
    pub user_id: String,
}

#[derive(Serialize, Debug)]
pub struct SessionOutput {
    pub user_id: String,
}

pub async fn signup(
    State(state): State<ServerState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionOutput>), ApiError> {
    let Json(input) = payload?;
    accounts::signup(&state.artists, &input.user_id, &input.name).await?;
    Ok((StatusCode::CREATED, Json(SessionOutput { user_id: input.user_id.trim().to_string() })))
}

pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<SessionOutput>, ApiError> {
    let Json(input) = payload?;
    let session = state.sessions.login(&input.user_id).await?;
    let user_id = session.user_id().unwrap_or_default().to_string();
    Ok(Json(SessionOutput { user_id }))
}

pub async fn logout(State(state): State<ServerState>) -> Result<Json<Ack>, ApiError> {
    state.sessions.logout().await?;
    Ok(Json(Ack::OK))
}
