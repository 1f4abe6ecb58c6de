//! Place-name geocoding endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::geocode::GeocodeError;

use super::super::AppState;
use super::{bad_request, error_response, required_str};

/// Resolve a place name to candidate coordinates.
///
/// Expects `{"location_name": …}`, answers `{"results": […]}` with an
/// empty list when nothing matches.
pub async fn perform_gis_lookup(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Response {
    let Some(location_name) = required_str(&body, "location_name") else {
        return bad_request("Missing 'location_name' in JSON body");
    };

    match state.geocoder.geocode(location_name).await {
        Ok(matches) => {
            info!("geocoded {location_name:?} to {} match(es)", matches.len());
            let results: Vec<_> = matches
                .iter()
                .map(|m| {
                    json!({
                        "address": m.address,
                        "lat": m.latitude,
                        "lon": m.longitude,
                    })
                })
                .collect();
            (StatusCode::OK, Json(json!({ "results": results }))).into_response()
        }
        Err(err @ GeocodeError::Unavailable(_)) => {
            warn!("geocoder unavailable: {err}");
            error_response(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
        Err(err) => {
            warn!("geocoding failed: {err}");
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}
