//! Place-name geocoding backend.
//!
//! Name-to-coordinate lookup is delegated to a Nominatim-compatible search
//! service; the gateway trait keeps handlers testable with substitutes.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::GeocodeMatch;

/// Configuration for the geocoding backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of a Nominatim-compatible service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum number of matches to request.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_endpoint() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_limit() -> usize {
    3
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
        }
    }
}

impl GeocoderConfig {
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

/// Errors from the geocoding backend.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),

    #[error("geocoding service error: {0}")]
    Api(String),

    #[error("unexpected geocoding response: {0}")]
    Parse(String),
}

/// Name-to-coordinate lookup capability.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a place name to zero or more candidate matches.
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeMatch>, GeocodeError>;
}

/// Geocoder backed by a Nominatim-compatible `/search` endpoint.
///
/// Nominatim's terms require an identifying user agent on every request.
pub struct NominatimGeocoder {
    config: GeocoderConfig,
    client: reqwest::Client,
}

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig, user_agent: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        let url = format!("{}/search", self.config.endpoint);
        debug!("geocoding {name:?} via {url}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", name),
                ("format", "jsonv2"),
                ("limit", &self.config.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Api(format!("HTTP {}", response.status())));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        places.into_iter().map(to_match).collect()
    }
}

/// Convert a raw place entry, parsing its string coordinates strictly.
/// Unparseable coordinates are a data-quality failure, not a skipped row.
fn to_match(place: NominatimPlace) -> Result<GeocodeMatch, GeocodeError> {
    let latitude = place
        .lat
        .parse()
        .map_err(|_| GeocodeError::Parse(format!("bad latitude {:?}", place.lat)))?;
    let longitude = place
        .lon
        .parse()
        .map_err(|_| GeocodeError::Parse(format!("bad longitude {:?}", place.lon)))?;

    Ok(GeocodeMatch {
        address: place.display_name,
        latitude,
        longitude,
    })
}
