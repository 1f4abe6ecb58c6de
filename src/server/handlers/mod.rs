//! Endpoint handlers.

mod exif;
mod gis;
mod ner;

pub use exif::extract_exif;
pub use gis::perform_gis_lookup;
pub use ner::extract_ner;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Uniform error payload.
pub(super) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub(super) fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// Pull a required string field out of an optional JSON body.
pub(super) fn required_str<'a>(
    body: &'a Option<Json<serde_json::Value>>,
    field: &str,
) -> Option<&'a str> {
    body.as_ref()
        .and_then(|Json(value)| value.get(field))
        .and_then(serde_json::Value::as_str)
}
