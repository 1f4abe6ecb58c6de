//! Coordinate types shared across the extraction paths.

use serde::{Deserialize, Serialize};

/// A coordinate pair in signed decimal degrees.
///
/// Positive north/east, negative south/west. Values are passed through as
/// decoded; geophysical plausibility is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeMatch {
    /// Full display address of the match.
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
