use std::time::Duration;
use tracing::{info, warn};

use crate::{Dataset, Result, SeedVerse};

use super::dedup::deduplicate;
use super::fetcher::TranslationFetcher;

/// Pause between verses so the public APIs are not hammered.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// What happened to each candidate during an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Candidates offered.
    pub candidates: usize,
    /// Candidates dropped as duplicates.
    pub duplicates: usize,
    /// References appended with all three translations.
    pub added: Vec<String>,
    /// References dropped for lack of a Finnish translation.
    pub missing_finnish: Vec<String>,
    /// References dropped for lack of an Amharic translation.
    pub missing_amharic: Vec<String>,
}

/// Appends new English verses to a dataset after fetching their translations.
pub struct Importer<'a> {
    fetcher: &'a TranslationFetcher,
    delay: Duration,
}

impl<'a> Importer<'a> {
    pub const fn new(fetcher: &'a TranslationFetcher) -> Self {
        Self {
            fetcher,
            delay: DEFAULT_DELAY,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Deduplicate `candidates`, fetch Finnish then Amharic text for each, and
    /// append the complete ones to `dataset`.
    ///
    /// A verse missing either translation is skipped. Network errors on a
    /// single verse are logged and count as a missing translation; they do not
    /// abort the batch.
    pub async fn run(
        &self,
        dataset: &mut Dataset,
        candidates: Vec<SeedVerse>,
    ) -> Result<ImportReport> {
        let mut report = ImportReport {
            candidates: candidates.len(),
            ..ImportReport::default()
        };

        let outcome = deduplicate(&dataset.english, candidates);
        report.duplicates = outcome.skipped();
        info!(
            "Found {} new verses (skipped {} duplicates)",
            outcome.unique.len(),
            report.duplicates
        );

        for (position, verse) in outcome.unique.into_iter().enumerate() {
            if position > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            info!("Translating: {}", verse.reference);

            let fetched = self.fetcher.fetch_finnish(&verse.reference).await;
            let Some(finnish) = lenient(fetched, "Finnish", &verse.reference) else {
                info!("Skipping {} (no Finnish translation)", verse.reference);
                report.missing_finnish.push(verse.reference);
                continue;
            };

            let fetched = self.fetcher.fetch_amharic(&verse.reference).await;
            let Some(amharic) = lenient(fetched, "Amharic", &verse.reference) else {
                info!("Skipping {} (no Amharic translation)", verse.reference);
                report.missing_amharic.push(verse.reference);
                continue;
            };

            dataset.push(&verse.reference, &verse.text, &amharic, &finnish);
            report.added.push(verse.reference);
        }

        info!(
            "Got complete translations for {}/{} verses",
            report.added.len(),
            report.candidates - report.duplicates
        );
        Ok(report)
    }
}

fn lenient(fetched: Result<Option<String>>, language: &str, reference: &str) -> Option<String> {
    fetched.unwrap_or_else(|e| {
        warn!("{language} translation failed for '{reference}': {e}");
        None
    })
}
