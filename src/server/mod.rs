//! Web server exposing the three extraction endpoints.
//!
//! Collaborator handles are constructed once at startup and injected
//! through [`AppState`], so handlers are testable with substitute
//! implementations and carry no hidden startup-order coupling.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::fetch::{ByteSource, HttpByteSource};
use crate::geocode::{Geocoder, NominatimGeocoder};
use crate::ner::{EntityTagger, HttpEntityTagger};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub tagger: Arc<dyn EntityTagger>,
    pub geocoder: Arc<dyn Geocoder>,
    pub images: Arc<dyn ByteSource>,
}

impl AppState {
    /// Wire up the real collaborators from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let timeout = settings.timeout();
        Self {
            tagger: Arc::new(HttpEntityTagger::new(
                settings.ner.clone(),
                &settings.user_agent,
                timeout,
            )),
            geocoder: Arc::new(NominatimGeocoder::new(
                settings.geocoder.clone(),
                &settings.user_agent,
                timeout,
            )),
            images: Arc::new(HttpByteSource::new(
                &settings.user_agent,
                timeout,
                settings.max_image_bytes,
            )),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::from_settings(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
