//! Verse command implementation

use anyhow::Result;
use std::path::Path;

use crate::output::{OutputFormat, print_json, print_verse_text};
use crate::utils::load_coordinator;

/// Print verse `id` (clamped), or a random one, in `lang`.
pub fn execute(
    dataset_dir: Option<&Path>,
    lang: &str,
    id: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    let coordinator = load_coordinator(dataset_dir)?;
    let verse = match id {
        Some(id) => coordinator.get_verse_by_id(id, lang),
        None => coordinator.get_random_verse(lang),
    };

    match format {
        OutputFormat::Text => print_verse_text(&verse),
        OutputFormat::Json => print_json(&verse)?,
    }
    Ok(())
}
