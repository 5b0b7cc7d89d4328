//! The entry point callers use to get a verse.
//!
//! [`VerseCoordinator`] sequences the three pipeline stages:
//!
//! 1. [`VerseLookup`] picks the verse (random or by clamped id)
//! 2. [`LanguageResolver`] picks the display text and gathers all translations
//! 3. [`ResponseFormatter`] assembles the [`VerseResponse`]
//!
//! Each call is independent and stateless. Components are injected through
//! the constructor so tests can substitute any of them.
//!
//! ```rust
//! use amen_core::{Dataset, VerseCoordinator};
//! use std::sync::Arc;
//!
//! let table = Arc::new(Dataset::builtin()?.into_table()?);
//! let coordinator = VerseCoordinator::from_table(table);
//!
//! let verse = coordinator.get_verse_by_id(1, "fi");
//! assert_eq!(verse.verse_id, 1);
//! assert_eq!(verse.language.code(), "fi");
//! # Ok::<(), amen_core::Error>(())
//! ```

use std::sync::Arc;

use crate::{
    LanguageResolver, ResponseFormatter, TableLookup, TableResolver, VerseFormatter, VerseLookup,
    VerseMetadata, VerseResponse, VerseTable,
};

/// Orchestrates lookup, language resolution and formatting.
pub struct VerseCoordinator<L = TableLookup, R = TableResolver, F = VerseFormatter> {
    lookup: L,
    resolver: R,
    formatter: F,
}

impl VerseCoordinator {
    /// Production wiring over a shared table.
    pub fn from_table(table: Arc<VerseTable>) -> Self {
        Self::new(
            TableLookup::new(Arc::clone(&table)),
            TableResolver::new(table),
            VerseFormatter,
        )
    }
}

impl<L, R, F> VerseCoordinator<L, R, F>
where
    L: VerseLookup,
    R: LanguageResolver,
    F: ResponseFormatter,
{
    pub const fn new(lookup: L, resolver: R, formatter: F) -> Self {
        Self {
            lookup,
            resolver,
            formatter,
        }
    }

    /// A random verse in `language` (English if unsupported).
    pub fn get_random_verse(&self, language: &str) -> VerseResponse {
        let metadata = self.lookup.get_random();
        self.respond(metadata, language)
    }

    /// The verse with `verse_id`, clamped into range, in `language`.
    pub fn get_verse_by_id(&self, verse_id: i64, language: &str) -> VerseResponse {
        let metadata = self.lookup.get_by_id(verse_id);
        self.respond(metadata, language)
    }

    fn respond(&self, metadata: VerseMetadata, language: &str) -> VerseResponse {
        let verse_text = self.resolver.get_text(metadata.verse_id, language);
        let translations = self.resolver.get_all_translations(metadata.verse_id);
        self.formatter.format(metadata, verse_text, translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_table;
    use crate::{Language, Translations, VerseText};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_by_id_matches_manual_composition() {
        // Given: the individual components over the same table
        let table = sample_table(8);
        let lookup = TableLookup::new(Arc::clone(&table));
        let resolver = TableResolver::new(Arc::clone(&table));
        let coordinator = VerseCoordinator::from_table(table);

        // When: composing by hand and through the coordinator
        let manual = VerseFormatter.format(
            lookup.get_by_id(5),
            resolver.get_text(5, "fi"),
            resolver.get_all_translations(5),
        );
        let coordinated = coordinator.get_verse_by_id(5, "fi");

        // Then: both paths agree
        assert_eq!(manual, coordinated);
        assert_eq!(coordinated.text, "fi text 5");
        assert_eq!(coordinated.language, Language::Fi);
    }

    #[test]
    fn test_by_id_clamps_and_falls_back() {
        let coordinator = VerseCoordinator::from_table(sample_table(3));

        let low = coordinator.get_verse_by_id(-5, "xx");
        assert_eq!(low.verse_id, 1);
        assert_eq!(low.language, Language::En);
        assert_eq!(low.text, "en text 1");

        let high = coordinator.get_verse_by_id(9999, "am");
        assert_eq!(high.verse_id, 3);
        assert_eq!(high.text, "am text 3");
    }

    #[test]
    fn test_random_verse_text_matches_its_id() {
        let coordinator = VerseCoordinator::from_table(sample_table(10));
        let mut seen = HashSet::new();

        for _ in 0..30 {
            let verse = coordinator.get_random_verse("am");
            assert_eq!(verse.text, format!("am text {}", verse.verse_id));
            assert_eq!(verse.translations.get(Language::Am), verse.text);
            seen.insert(verse.verse_id);
        }
        assert!(seen.len() > 1);
    }

    struct FixedLookup(AtomicU32);

    impl VerseLookup for FixedLookup {
        fn get_random(&self) -> VerseMetadata {
            self.0.fetch_add(1, Ordering::SeqCst);
            self.get_by_id(2)
        }

        fn get_by_id(&self, requested_id: i64) -> VerseMetadata {
            VerseMetadata {
                verse_id: u32::try_from(requested_id).unwrap_or(1),
                book: "Stub".to_string(),
                chapter: 1,
                verse_number: "1".to_string(),
            }
        }
    }

    struct EchoResolver;

    impl LanguageResolver for EchoResolver {
        fn get_text(&self, verse_id: u32, requested_language: &str) -> VerseText {
            VerseText {
                text: format!("{verse_id}:{requested_language}"),
                language: Language::En,
            }
        }

        fn get_all_translations(&self, verse_id: u32) -> Translations {
            Translations {
                en: format!("en {verse_id}"),
                am: format!("am {verse_id}"),
                fi: format!("fi {verse_id}"),
            }
        }
    }

    #[test]
    fn test_components_are_substitutable() {
        let coordinator = VerseCoordinator::new(
            FixedLookup(AtomicU32::new(0)),
            EchoResolver,
            VerseFormatter,
        );

        let verse = coordinator.get_random_verse("am");
        assert_eq!(verse.verse_id, 2);
        assert_eq!(verse.book, "Stub");
        assert_eq!(verse.text, "2:am");
        assert_eq!(verse.translations.fi, "fi 2");
        assert_eq!(coordinator.lookup.0.load(Ordering::SeqCst), 1);
    }
}
