//! Remote byte retrieval.
//!
//! Fetching is a collaborator of the extraction pipeline, not part of it:
//! the pipeline runs on a complete buffer, and a fetch failure is reported
//! before the pipeline is ever invoked.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Failures while retrieving remote bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("response exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// A source of remote bytes.
///
/// Injected into request handling so tests can substitute canned payloads.
#[async_trait]
pub trait ByteSource: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// reqwest-backed byte source with a response-size cap.
pub struct HttpByteSource {
    client: reqwest::Client,
    max_bytes: usize,
}

impl HttpByteSource {
    pub fn new(user_agent: &str, timeout: Duration, max_bytes: usize) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, max_bytes }
    }
}

#[async_trait]
impl ByteSource for HttpByteSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        debug!("fetching {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        if let Some(length) = response.content_length() {
            if length > self.max_bytes as u64 {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let body = response.bytes().await?;
        if body.len() > self.max_bytes {
            return Err(FetchError::TooLarge {
                limit: self.max_bytes,
            });
        }

        Ok(body.to_vec())
    }
}
