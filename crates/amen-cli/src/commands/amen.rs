//! Amen command implementation

use amen_core::BlessingStore;
use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use colored::Colorize;
use std::path::Path;
use tracing::info;

use crate::utils::load_coordinator;

/// Lock verse `id` (clamped) as today's blessing.
///
/// A blessing already accepted today is kept unless `force` is set.
pub fn execute(dataset_dir: Option<&Path>, id: i64, lang: &str, force: bool) -> Result<()> {
    let store = BlessingStore::new().context("Failed to open blessing store")?;

    if let Some(existing) = store.load_today(Local::now()) {
        if !force {
            bail!(
                "Already said Amen to verse {} ({}) today; use --force to replace it",
                existing.verse.verse_id,
                existing.verse.citation()
            );
        }
        info!("Replacing today's blessing (verse {})", existing.verse.verse_id);
    }

    let verse = load_coordinator(dataset_dir)?.get_verse_by_id(id, lang);
    let record = store
        .lock(verse, Utc::now())
        .with_context(|| format!("Failed to save blessing to {}", store.path().display()))?;

    println!(
        "{} {} is your blessing for today.",
        "Amen!".green().bold(),
        record.verse.citation()
    );
    println!("{}", record.verse.text);
    Ok(())
}
