//! The canonical in-memory verse table.
//!
//! The table is built exactly once from three parallel per-language datasets
//! and is read-only afterwards. Position in the English dataset decides the
//! verse id (`index + 1`), so the three datasets must line up one-to-one: a
//! length mismatch is a configuration error and the table refuses to build.
//!
//! ```rust
//! use amen_core::{SeedVerse, VerseTable};
//!
//! let en = [SeedVerse::new("Text EN", "John 3:16")];
//! let am = [SeedVerse::new("Text AM", "John 3:16")];
//! let fi = [SeedVerse::new("Text FI", "John 3:16")];
//!
//! let table = VerseTable::load(&en, &am, &fi)?;
//! assert_eq!(table.count(), 1);
//! assert_eq!(table.metadata_of(1).book, "John");
//! # Ok::<(), amen_core::Error>(())
//! ```

use tracing::{debug, info};

use crate::reference::parse_reference;
use crate::{Error, Result, SeedVerse, Translations, VerseMetadata};

/// One verse with its parsed metadata and all of its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub metadata: VerseMetadata,
    pub translations: Translations,
}

/// Immutable table of every verse the service can return.
///
/// Share it behind an `Arc`; nothing mutates it after [`VerseTable::load`].
#[derive(Debug)]
pub struct VerseTable {
    records: Vec<VerseRecord>,
}

impl VerseTable {
    /// Build the table from English, Amharic and Finnish datasets.
    ///
    /// References are taken from the English dataset only; the other two
    /// contribute their text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the three datasets differ in length, if the
    /// English dataset is empty, or if any English text is empty.
    pub fn load(english: &[SeedVerse], amharic: &[SeedVerse], finnish: &[SeedVerse]) -> Result<Self> {
        if english.len() != amharic.len() || english.len() != finnish.len() {
            return Err(Error::Config(format!(
                "Verse dataset lengths must match: English={}, Amharic={}, Finnish={}",
                english.len(),
                amharic.len(),
                finnish.len()
            )));
        }

        if english.is_empty() {
            return Err(Error::Config(
                "Verse datasets are empty; at least one verse is required".into(),
            ));
        }

        let mut records = Vec::with_capacity(english.len());
        for (index, ((en, am), fi)) in english.iter().zip(amharic).zip(finnish).enumerate() {
            let verse_id = u32::try_from(index + 1)
                .map_err(|_| Error::Config(format!("Too many verses: {}", english.len())))?;

            if en.text.trim().is_empty() {
                return Err(Error::Config(format!(
                    "English text is empty for verse {verse_id} ({})",
                    en.reference
                )));
            }

            let parsed = parse_reference(&en.reference);
            if parsed.chapter == 0 {
                debug!(
                    "Reference '{}' for verse {} did not parse; keeping it as the book name",
                    en.reference, verse_id
                );
            }

            records.push(VerseRecord {
                metadata: VerseMetadata {
                    verse_id,
                    book: parsed.book,
                    chapter: parsed.chapter,
                    verse_number: parsed.verse_number,
                },
                translations: Translations {
                    en: en.text.clone(),
                    am: am.text.clone(),
                    fi: fi.text.clone(),
                },
            });
        }

        info!("Loaded {} verses", records.len());
        Ok(Self { records })
    }

    /// Number of verses; always at least one.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Highest valid verse id.
    pub fn max_id(&self) -> u32 {
        // `load` refuses tables whose length does not fit in a u32.
        u32::try_from(self.records.len()).unwrap_or(u32::MAX)
    }

    /// Metadata for a verse id in `[1, count]`.
    ///
    /// The caller guarantees the id is valid; an out-of-range id is a bug and panics.
    pub fn metadata_of(&self, verse_id: u32) -> &VerseMetadata {
        &self.record(verse_id).metadata
    }

    /// Translations for a verse id in `[1, count]`.
    ///
    /// Same contract as [`VerseTable::metadata_of`].
    pub fn translations_of(&self, verse_id: u32) -> &Translations {
        &self.record(verse_id).translations
    }

    /// Clamp an arbitrary requested id into `[1, count]`.
    pub fn clamp_id(&self, requested: i64) -> u32 {
        let clamped = requested.clamp(1, i64::from(self.max_id()));
        u32::try_from(clamped).unwrap_or(1)
    }

    /// All records in verse-id order.
    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    fn record(&self, verse_id: u32) -> &VerseRecord {
        &self.records[verse_id as usize - 1]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::Language;

    fn seeds(prefix: &str, refs: &[&str]) -> Vec<SeedVerse> {
        refs.iter()
            .map(|r| SeedVerse::new(format!("{prefix} {r}"), *r))
            .collect()
    }

    #[test]
    fn test_single_entry_table() {
        // Given: three single-entry datasets
        let en = vec![SeedVerse::new("Text EN", "John 3:16")];
        let am = vec![SeedVerse::new("Text AM", "John 3:16")];
        let fi = vec![SeedVerse::new("Text FI", "John 3:16")];

        // When: loading the table
        let table = VerseTable::load(&en, &am, &fi).unwrap();

        // Then: one verse with parsed metadata and all three translations
        assert_eq!(table.count(), 1);
        let meta = table.metadata_of(1);
        assert_eq!(meta.verse_id, 1);
        assert_eq!(meta.book, "John");
        assert_eq!(meta.chapter, 3);
        assert_eq!(meta.verse_number, "16");

        let translations = table.translations_of(1);
        assert_eq!(translations.get(Language::En), "Text EN");
        assert_eq!(translations.get(Language::Am), "Text AM");
        assert_eq!(translations.get(Language::Fi), "Text FI");
    }

    #[test]
    fn test_mismatched_lengths_refuse_to_load() {
        // Given: 2 English, 1 Amharic, 2 Finnish
        let en = seeds("en", &["John 3:16", "Psalm 23:1"]);
        let am = seeds("am", &["John 3:16"]);
        let fi = seeds("fi", &["John 3:16", "Psalm 23:1"]);

        // When/Then: construction fails with a configuration error naming all lengths
        match VerseTable::load(&en, &am, &fi) {
            Err(Error::Config(msg)) => {
                assert!(msg.contains("English=2"));
                assert!(msg.contains("Amharic=1"));
                assert!(msg.contains("Finnish=2"));
            },
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_datasets_refuse_to_load() {
        let err = VerseTable::load(&[], &[], &[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_english_text_refuses_to_load() {
        let en = vec![SeedVerse::new("   ", "John 3:16")];
        let am = seeds("am", &["John 3:16"]);
        let fi = seeds("fi", &["John 3:16"]);
        assert!(matches!(
            VerseTable::load(&en, &am, &fi),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_ids_follow_english_order() {
        let refs = ["Psalm 23:1", "1 Peter 5:7", "Numbers 6:24-25"];
        let table =
            VerseTable::load(&seeds("en", &refs), &seeds("am", &refs), &seeds("fi", &refs))
                .unwrap();

        for (index, record) in table.records().iter().enumerate() {
            assert_eq!(record.metadata.verse_id as usize, index + 1);
        }
        assert_eq!(table.metadata_of(2).book, "1 Peter");
        assert_eq!(table.metadata_of(3).verse_number, "24-25");
    }

    #[test]
    fn test_references_come_from_english_dataset() {
        let en = vec![SeedVerse::new("Text EN", "John 3:16")];
        let am = vec![SeedVerse::new("Text AM", "ዮሐንስ 3:16")];
        let fi = vec![SeedVerse::new("Text FI", "Johannes 3:16")];
        let table = VerseTable::load(&en, &am, &fi).unwrap();
        assert_eq!(table.metadata_of(1).book, "John");
    }

    #[test]
    fn test_unparseable_reference_degrades_silently() {
        let en = vec![SeedVerse::new("Glory be", "Doxology")];
        let table = VerseTable::load(&en, &en, &en).unwrap();
        let meta = table.metadata_of(1);
        assert_eq!(meta.book, "Doxology");
        assert_eq!(meta.chapter, 0);
        assert_eq!(meta.verse_number, "0");
    }

    #[test]
    fn test_clamp_id_bounds() {
        let refs = ["Psalm 23:1", "John 3:16", "Romans 8:28"];
        let table =
            VerseTable::load(&seeds("en", &refs), &seeds("am", &refs), &seeds("fi", &refs))
                .unwrap();

        assert_eq!(table.clamp_id(i64::MIN), 1);
        assert_eq!(table.clamp_id(0), 1);
        assert_eq!(table.clamp_id(2), 2);
        assert_eq!(table.clamp_id(9999), 3);
        assert_eq!(table.clamp_id(i64::MAX), 3);
        assert_eq!(table.metadata_of(table.clamp_id(9999)).book, "Romans");
    }
}
