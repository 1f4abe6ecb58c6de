//! Local-file GPS extraction command.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::exif::extract_gps;

/// Inspect a local image file for embedded GPS coordinates.
pub fn cmd_exif(path: &Path) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    match extract_gps(&bytes)? {
        Some(coords) => {
            println!(
                "{} {}: {:.6}, {:.6}",
                style("✓").green(),
                path.display(),
                coords.latitude,
                coords.longitude
            );
        }
        None => {
            println!("{} {}: no GPS data", style("-").dim(), path.display());
        }
    }
    Ok(())
}
