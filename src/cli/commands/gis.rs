//! One-shot geocoding command.

use console::style;

use crate::config::Settings;
use crate::geocode::{Geocoder, NominatimGeocoder};

/// Resolve a place name against the geocoding backend.
pub async fn cmd_gis(settings: &Settings, name: &str) -> anyhow::Result<()> {
    let geocoder = NominatimGeocoder::new(
        settings.geocoder.clone(),
        &settings.user_agent,
        settings.timeout(),
    );

    let matches = geocoder.geocode(name).await?;

    if matches.is_empty() {
        println!("{} no matches for {:?}", style("-").dim(), name);
    } else {
        for found in matches {
            println!(
                "{} {:.6}, {:.6}  {}",
                style("✓").green(),
                found.latitude,
                found.longitude,
                found.address
            );
        }
    }
    Ok(())
}
