//! Import command implementation

use amen_core::maintenance::{
    ImportReport, Importer, TranslationFetcher, VerseScraper, deduplicate,
};
use amen_core::{Dataset, Language, SeedVerse};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::cli::ImportSource;

/// Import English candidates from `source` into the dataset at `dataset_dir`.
///
/// A directory without dataset files starts from the built-in verses.
pub async fn execute(
    dataset_dir: Option<&Path>,
    source: &ImportSource,
    delay_ms: u64,
    dry_run: bool,
) -> Result<()> {
    let Some(dir) = dataset_dir else {
        bail!("import needs a dataset directory; pass --dataset-dir or set AMEN_DATASET_DIR");
    };

    let candidates = load_candidates(source).await?;

    let mut dataset = open_dataset(dir)?;

    if dry_run {
        let outcome = deduplicate(&dataset.english, candidates);
        println!(
            "{} new, {} duplicate",
            outcome.unique.len().to_string().green(),
            outcome.skipped()
        );
        for verse in &outcome.unique {
            println!("  + {}", verse.reference);
        }
        return Ok(());
    }

    let fetcher = TranslationFetcher::new()?;
    let report = Importer::new(&fetcher)
        .with_delay(Duration::from_millis(delay_ms))
        .run(&mut dataset, candidates)
        .await?;

    if report.added.is_empty() {
        info!("Nothing to add; dataset left unchanged");
    } else {
        dataset
            .save_to_dir(dir)
            .with_context(|| format!("Failed to save dataset to {}", dir.display()))?;
    }
    print_report(&report, dataset.len());
    Ok(())
}

async fn load_candidates(source: &ImportSource) -> Result<Vec<SeedVerse>> {
    if let Some(input) = &source.input {
        let raw = fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON array of verses", input.display()));
    }

    let Some(url) = &source.url else {
        bail!("import needs --input or --url");
    };
    let verses = VerseScraper::new()?
        .scrape(url)
        .await
        .with_context(|| format!("Failed to scrape {url}"))?;
    if verses.is_empty() {
        bail!("No verses found at {url}; check the URL and page structure");
    }
    Ok(verses)
}

fn open_dataset(dir: &Path) -> Result<Dataset> {
    let has_files = Language::ALL
        .iter()
        .any(|lang| Dataset::file_path(dir, *lang).exists());
    if has_files {
        return Dataset::from_dir(dir)
            .with_context(|| format!("Failed to read dataset from {}", dir.display()));
    }
    info!(
        "No dataset in {}; starting from the built-in verses",
        dir.display()
    );
    Ok(Dataset::builtin()?)
}

fn print_report(report: &ImportReport, total: usize) {
    println!(
        "{} added, {} duplicate, {} missing Finnish, {} missing Amharic ({} verses total)",
        report.added.len().to_string().green(),
        report.duplicates,
        report.missing_finnish.len(),
        report.missing_amharic.len(),
        total
    );
    for reference in &report.added {
        println!("  + {reference}");
    }
    for reference in report.missing_finnish.iter().chain(&report.missing_amharic) {
        println!("  {} {reference}", "-".bright_black());
    }
}
