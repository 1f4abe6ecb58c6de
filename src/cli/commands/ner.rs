//! One-shot text annotation command.

use console::style;

use crate::config::Settings;
use crate::ner::{extract_locations, EntityTagger, HttpEntityTagger};

/// Run a block of text through the annotation backend.
pub async fn cmd_ner(settings: &Settings, text: &str) -> anyhow::Result<()> {
    let tagger = HttpEntityTagger::new(
        settings.ner.clone(),
        &settings.user_agent,
        settings.timeout(),
    );

    let spans = tagger.annotate(text).await?;
    let locations = extract_locations(&spans);

    if locations.is_empty() {
        println!("{} no locations found", style("-").dim());
    } else {
        for location in locations {
            println!("{} {}", style("✓").green(), location);
        }
    }
    Ok(())
}
