#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::{SeedVerse, VerseTable};

/// A table of `count` verses whose text is `"<code> text <id>"`.
pub fn sample_table(count: usize) -> Arc<VerseTable> {
    let seeds = |code: &str| -> Vec<SeedVerse> {
        (1..=count)
            .map(|id| SeedVerse::new(format!("{code} text {id}"), format!("Psalm {id}:1")))
            .collect()
    };
    Arc::new(VerseTable::load(&seeds("en"), &seeds("am"), &seeds("fi")).unwrap())
}
