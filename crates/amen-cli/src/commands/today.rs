//! Today command implementation

use amen_core::{BlessingStore, VerseResponse, resolve_language};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::output::{OutputFormat, print_json, print_verse_text};
use crate::utils::load_coordinator;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodayOutput {
    /// Whether the verse is a blessing accepted earlier today.
    locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    locked_at: Option<DateTime<Utc>>,
    verse: VerseResponse,
}

/// Show today's blessing in `lang`, or a fresh random verse when none is locked.
pub fn execute(dataset_dir: Option<&Path>, lang: &str, format: OutputFormat) -> Result<()> {
    let store = BlessingStore::new().context("Failed to open blessing store")?;

    let output = if let Some(record) = store.load_today(Local::now()) {
        TodayOutput {
            locked: true,
            locked_at: Some(record.timestamp),
            verse: record.verse.in_language(resolve_language(lang)),
        }
    } else {
        TodayOutput {
            locked: false,
            locked_at: None,
            verse: load_coordinator(dataset_dir)?.get_random_verse(lang),
        }
    };

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => {
            if output.locked {
                println!("{}", "Today's blessing".green().bold());
            } else {
                println!(
                    "{}",
                    "No blessing yet today. Run `amen amen --id <ID>` to keep this one.".yellow()
                );
            }
            print_verse_text(&output.verse);
        },
    }
    Ok(())
}
