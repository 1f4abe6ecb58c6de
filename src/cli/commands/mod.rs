//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod exif;
mod gis;
mod ner;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "geosig")]
#[command(about = "Geographic signal extraction service")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the extraction service
    Serve {
        /// Bind address: port, host, or host:port
        #[arg(short, long, default_value = "127.0.0.1:5001")]
        bind: String,
    },

    /// Extract GPS coordinates from a local image file
    Exif {
        /// Image file to inspect
        path: PathBuf,
    },

    /// Extract place names from text via the annotation backend
    Ner {
        /// Text to annotate
        text: String,
    },

    /// Resolve a place name to coordinates
    Gis {
        /// Place name to look up
        name: String,
    },
}

/// Parse arguments and dispatch.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing::debug!("verbose logging enabled");
    }
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Exif { path } => exif::cmd_exif(&path),
        Commands::Ner { text } => ner::cmd_ner(&settings, &text).await,
        Commands::Gis { name } => gis::cmd_gis(&settings, &name).await,
    }
}
