//! Router configuration for the extraction service.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // One endpoint per input modality
        .route("/ner", post(handlers::extract_ner))
        .route("/exif", post(handlers::extract_exif))
        .route("/gis", post(handlers::perform_gis_lookup))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
