//! Embedded GPS metadata extraction.
//!
//! The pipeline runs raw image bytes through a format-selected container
//! decoder, isolates the GPS sub-block via the tag tables, and converts its
//! degrees/minutes/seconds rationals into signed decimal degrees.

mod decoder;
mod directory;
mod gps;
pub mod tags;

pub use decoder::{decoder_for, DecodeError, MetadataDecoder};
pub use directory::{MetadataDirectory, TagValue};
pub use gps::{locate_gps_block, GpsDirectory, GpsError, Hemisphere, Rational};

use thiserror::Error;

use crate::models::GpsCoordinates;

/// Extraction failures. Decode failures (the bytes are not a readable
/// image) stay distinct from parse failures (GPS fields are present but
/// structurally invalid); absence is not an error at all.
#[derive(Debug, Error)]
pub enum ExifError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("malformed GPS metadata: {0}")]
    Parse(#[from] GpsError),
}

/// Extract embedded GPS coordinates from raw image bytes.
///
/// `Ok(None)` covers every absence case: no metadata directory, no GPS
/// sub-block, or a sub-block without the four coordinate fields.
pub fn extract_gps(bytes: &[u8]) -> Result<Option<GpsCoordinates>, ExifError> {
    let decoder = decoder_for(bytes)?;
    let Some(directory) = decoder.decode(bytes)? else {
        return Ok(None);
    };
    let Some(block) = locate_gps_block(&directory) else {
        return Ok(None);
    };
    Ok(block.decode()?)
}
