//! Configuration management for geosignal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::geocode::GeocoderConfig;
use crate::ner::NerConfig;

/// Config filename looked up in the working directory when no explicit
/// path is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "geosignal.toml";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5001;

/// Service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// User agent for outbound HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Upper bound on fetched image size in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
    /// Annotation backend settings.
    #[serde(default)]
    pub ner: NerConfig,
    /// Geocoding backend settings.
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

fn default_user_agent() -> String {
    "geosignal/0.1 (geographic signal extraction)".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_image_bytes() -> usize {
    20 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            max_image_bytes: default_max_image_bytes(),
            ner: NerConfig::default(),
            geocoder: GeocoderConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, `geosignal.toml` in the working
    /// directory, or defaults, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_env();
        Ok(settings)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Environment overrides, highest precedence. `.env` files are loaded
    /// by `main` before this runs.
    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("GEOSIGNAL_USER_AGENT") {
            self.user_agent = value;
        }
        if let Ok(value) = std::env::var("GEOSIGNAL_NER_ENDPOINT") {
            self.ner.endpoint = value;
        }
        if let Ok(value) = std::env::var("GEOSIGNAL_GEOCODER_ENDPOINT") {
            self.geocoder.endpoint = value;
        }
    }

    /// Outbound request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_stand_alone() {
        let settings = Settings::default();
        assert_eq!(settings.request_timeout, 10);
        assert_eq!(settings.max_image_bytes, 20 * 1024 * 1024);
        assert_eq!(settings.geocoder.limit, 3);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geosignal.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "request_timeout = 30").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[ner]").unwrap();
        writeln!(file, "endpoint = \"http://tagger.internal:9000\"").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.request_timeout, 30);
        assert_eq!(settings.ner.endpoint, "http://tagger.internal:9000");
        // Untouched sections keep their defaults.
        assert_eq!(settings.geocoder.limit, 3);
        assert_eq!(settings.user_agent, default_user_agent());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn timeout_converts_to_duration() {
        let settings = Settings {
            request_timeout: 7,
            ..Default::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(7));
    }
}
