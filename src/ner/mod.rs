//! Named-entity annotation backend.
//!
//! Entity tagging is an external capability reached over HTTP. The trait
//! keeps request handling testable with substitute implementations.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::EntitySpan;

/// Labels treated as geographic signals: geopolitical entities and
/// physical locations.
pub const LOCATION_LABELS: &[&str] = &["GPE", "LOC"];

/// Configuration for the annotation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerConfig {
    /// Annotation endpoint base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier requested from the backend.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_endpoint() -> String {
    "http://localhost:8081".to_string()
}

fn default_model() -> String {
    "en_core_web_sm".to_string()
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

impl NerConfig {
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

/// Errors from the annotation backend.
#[derive(Debug, Error)]
pub enum NerError {
    #[error("annotation backend unreachable: {0}")]
    Connection(String),

    #[error("annotation backend error: {0}")]
    Api(String),

    #[error("unexpected annotation response: {0}")]
    Parse(String),
}

/// Text annotation capability.
#[async_trait]
pub trait EntityTagger: Send + Sync {
    /// Annotate the text and return every entity span found.
    async fn annotate(&self, text: &str) -> Result<Vec<EntitySpan>, NerError>;
}

/// Filter annotation output down to place names.
///
/// Keeps GPE and LOC spans, deduplicated with first-occurrence order
/// preserved so responses are stable for identical input.
pub fn extract_locations(spans: &[EntitySpan]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for span in spans {
        if LOCATION_LABELS.contains(&span.label.as_str()) && !locations.contains(&span.text) {
            locations.push(span.text.clone());
        }
    }
    locations
}

/// HTTP entity tagger speaking a spaCy-server-style JSON protocol.
pub struct HttpEntityTagger {
    config: NerConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    entities: Vec<EntitySpan>,
}

impl HttpEntityTagger {
    pub fn new(config: NerConfig, user_agent: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Check whether the backend answers at all.
    pub async fn is_available(&self) -> bool {
        match self.client.get(&self.config.endpoint).send().await {
            Ok(resp) => !resp.status().is_server_error(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl EntityTagger for HttpEntityTagger {
    async fn annotate(&self, text: &str) -> Result<Vec<EntitySpan>, NerError> {
        let url = format!("{}/annotate", self.config.endpoint);
        debug!("annotating {} chars via {url}", text.len());

        let response = self
            .client
            .post(&url)
            .json(&AnnotateRequest {
                text,
                model: &self.config.model,
            })
            .send()
            .await
            .map_err(|e| NerError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NerError::Api(format!("HTTP {}", response.status())));
        }

        let parsed: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| NerError::Parse(e.to_string()))?;

        Ok(parsed.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, label: &str) -> EntitySpan {
        EntitySpan {
            text: text.to_string(),
            label: label.to_string(),
            start: 0,
            end: 0,
        }
    }

    #[test]
    fn keeps_only_geographic_labels() {
        let spans = vec![
            span("Alice", "PERSON"),
            span("Paris", "GPE"),
            span("Acme Corp", "ORG"),
            span("the Alps", "LOC"),
            span("1999", "DATE"),
        ];
        assert_eq!(extract_locations(&spans), vec!["Paris", "the Alps"]);
    }

    #[test]
    fn dedups_preserving_first_occurrence() {
        let spans = vec![
            span("Berlin", "GPE"),
            span("Tokyo", "GPE"),
            span("Berlin", "GPE"),
        ];
        assert_eq!(extract_locations(&spans), vec!["Berlin", "Tokyo"]);
    }

    #[test]
    fn empty_annotation_yields_no_locations() {
        assert!(extract_locations(&[]).is_empty());
    }

    #[test]
    fn config_defaults_are_sensible() {
        let config = NerConfig::default();
        assert_eq!(config.model, "en_core_web_sm");
        assert!(config.endpoint.starts_with("http://"));
    }
}
