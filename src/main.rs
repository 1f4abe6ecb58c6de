//! geosignal - geographic signal extraction service.
//!
//! Extracts place names from text, GPS coordinates from image metadata,
//! and coordinates from place names.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geosignal::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "geosignal=info"
    } else {
        "geosignal=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
