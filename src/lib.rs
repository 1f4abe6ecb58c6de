//! geosignal - geographic signal extraction service.
//!
//! Extracts candidate geographic signals from three independent input
//! modalities: free text (place-name entities), image binaries (embedded
//! GPS metadata), and place-name strings (geocoding to coordinates).

pub mod cli;
pub mod config;
pub mod exif;
pub mod fetch;
pub mod geocode;
pub mod models;
pub mod ner;
pub mod server;
