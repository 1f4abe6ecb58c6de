//! Text annotation endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::ner::extract_locations;

use super::super::AppState;
use super::{bad_request, error_response, required_str};

/// Extract place names from a block of text.
///
/// Expects `{"text": …}`, answers `{"locations": […]}`.
pub async fn extract_ner(State(state): State<AppState>, body: Option<Json<Value>>) -> Response {
    let Some(text) = required_str(&body, "text") else {
        return bad_request("Missing 'text' in JSON body");
    };

    match state.tagger.annotate(text).await {
        Ok(spans) => {
            let locations = extract_locations(&spans);
            info!("annotation found {} location(s)", locations.len());
            (StatusCode::OK, Json(json!({ "locations": locations }))).into_response()
        }
        Err(err) => {
            warn!("annotation failed: {err}");
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("annotation failed: {err}"),
            )
        }
    }
}
