//! Image GPS metadata endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};
use url::Url;

use crate::exif::{extract_gps, ExifError};

use super::super::AppState;
use super::{bad_request, error_response, required_str};

/// Fetch an image and extract its embedded GPS coordinates.
///
/// Expects `{"image_url": …}`. Answers `{"gps": {"lat": …, "lon": …}}` on
/// success and `{"gps": null}` when the image carries no location; decode
/// and parse failures are errors, never shaped as absence.
pub async fn extract_exif(State(state): State<AppState>, body: Option<Json<Value>>) -> Response {
    let Some(image_url) = required_str(&body, "image_url") else {
        return bad_request("Missing 'image_url' in JSON body");
    };
    let url = match Url::parse(image_url) {
        Ok(url) => url,
        Err(err) => return bad_request(format!("Invalid 'image_url': {err}")),
    };

    let bytes = match state.images.fetch(&url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("image fetch failed for {url}: {err}");
            return error_response(
                StatusCode::BAD_GATEWAY,
                format!("failed to fetch image: {err}"),
            );
        }
    };

    match extract_gps(&bytes) {
        Ok(Some(coords)) => {
            info!("GPS found: ({}, {})", coords.latitude, coords.longitude);
            (
                StatusCode::OK,
                Json(json!({ "gps": { "lat": coords.latitude, "lon": coords.longitude } })),
            )
                .into_response()
        }
        Ok(None) => (StatusCode::OK, Json(json!({ "gps": null }))).into_response(),
        Err(ExifError::Decode(err)) => {
            warn!("image decode failed: {err}");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("could not decode image: {err}"),
            )
        }
        Err(ExifError::Parse(err)) => {
            warn!("GPS parse failed: {err}");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("malformed GPS metadata: {err}"),
            )
        }
    }
}
