pub mod auth;
pub mod gallery;
pub mod profile;
pub mod viewer;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, session and artist routes.
pub fn build_router(state: ServerState, cors: CorsLayer, max_upload_bytes: usize) -> Router {
    let public = Router::new()
        .route("/health", get(health));

    let auth_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    let artist_routes = Router::new()
        .route("/api/profile", get(profile::get_profile).put(profile::put_profile))
        .route("/api/profile/picture", put(profile::put_picture))
        .route("/api/gallery", get(gallery::list))
        .route("/api/artworks", post(gallery::add_artwork))
        .route("/api/models", post(gallery::add_model))
        .route("/api/items/:kind/:index", delete(gallery::delete_item))
        .route("/api/portfolio", get(viewer::portfolio))
        .route("/api/ar", get(viewer::ar_current))
        .route("/api/ar/next", post(viewer::ar_next))
        .route("/api/ar/prev", post(viewer::ar_prev))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    public
        .merge(auth_routes)
        .merge(artist_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
