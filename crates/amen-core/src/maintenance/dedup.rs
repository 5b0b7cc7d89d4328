use std::collections::HashSet;
use tracing::debug;

use crate::SeedVerse;

/// Canonical form of a reference for duplicate detection.
///
/// En and em dashes become `-`, surrounding whitespace is dropped, and the
/// result is lowercased.
///
/// ```rust
/// use amen_core::maintenance::normalize_reference;
///
/// assert_eq!(normalize_reference(" Numbers 6:24\u{2013}25 "), "numbers 6:24-25");
/// ```
pub fn normalize_reference(reference: &str) -> String {
    reference
        .replace(['\u{2013}', '\u{2014}'], "-")
        .trim()
        .to_lowercase()
}

/// Result of filtering candidates against a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Candidates that are new, in input order.
    pub unique: Vec<SeedVerse>,
    /// References skipped because the dataset already has them.
    pub skipped_existing: Vec<String>,
    /// References skipped because an earlier candidate had the same one.
    pub skipped_batch: Vec<String>,
}

impl DedupOutcome {
    pub fn skipped(&self) -> usize {
        self.skipped_existing.len() + self.skipped_batch.len()
    }
}

/// Drop candidates whose normalized reference is already in `existing` or
/// appeared earlier in `candidates`.
pub fn deduplicate(existing: &[SeedVerse], candidates: Vec<SeedVerse>) -> DedupOutcome {
    let known: HashSet<String> = existing
        .iter()
        .map(|v| normalize_reference(&v.reference))
        .collect();
    let mut seen = HashSet::new();
    let mut outcome = DedupOutcome::default();

    for candidate in candidates {
        let normalized = normalize_reference(&candidate.reference);
        if known.contains(&normalized) {
            debug!("Skipping duplicate: {}", candidate.reference);
            outcome.skipped_existing.push(candidate.reference);
        } else if !seen.insert(normalized) {
            debug!("Skipping duplicate within batch: {}", candidate.reference);
            outcome.skipped_batch.push(candidate.reference);
        } else {
            outcome.unique.push(candidate);
        }
    }

    outcome
}
