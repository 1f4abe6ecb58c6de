//! Data models for geosignal.

mod entity;
mod geo;

pub use entity::EntitySpan;
pub use geo::{GeocodeMatch, GpsCoordinates};
