//! Per-language text retrieval with English fallback.

use std::sync::Arc;
use tracing::debug;

use crate::{Language, Translations, VerseTable, VerseText};

/// Maps a verse and a requested language code to display text.
pub trait LanguageResolver: Send + Sync {
    /// Text in `requested_language` if supported, otherwise English.
    ///
    /// The returned [`VerseText::language`] reports what was actually served.
    fn get_text(&self, verse_id: u32, requested_language: &str) -> VerseText;

    /// Every translation of the verse, so a client can switch languages
    /// without another round trip.
    fn get_all_translations(&self, verse_id: u32) -> Translations;
}

/// Resolve a requested code against the supported set.
///
/// ```rust
/// use amen_core::{Language, resolve_language};
///
/// assert_eq!(resolve_language("fi"), Language::Fi);
/// assert_eq!(resolve_language("xx"), Language::En);
/// ```
pub fn resolve_language(requested: &str) -> Language {
    Language::from_code(requested).unwrap_or_else(|| {
        debug!("Unsupported language '{requested}', falling back to en");
        Language::DEFAULT
    })
}

/// [`LanguageResolver`] backed by the shared [`VerseTable`].
pub struct TableResolver {
    table: Arc<VerseTable>,
}

impl TableResolver {
    pub const fn new(table: Arc<VerseTable>) -> Self {
        Self { table }
    }
}

impl LanguageResolver for TableResolver {
    fn get_text(&self, verse_id: u32, requested_language: &str) -> VerseText {
        let language = resolve_language(requested_language);
        let verse_id = self.table.clamp_id(i64::from(verse_id));
        VerseText {
            text: self.table.translations_of(verse_id).get(language).to_string(),
            language,
        }
    }

    fn get_all_translations(&self, verse_id: u32) -> Translations {
        let verse_id = self.table.clamp_id(i64::from(verse_id));
        self.table.translations_of(verse_id).clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SeedVerse;
    use crate::test_support::sample_table;
    use proptest::prelude::*;

    #[test]
    fn test_supported_languages_resolve_to_themselves() {
        let resolver = TableResolver::new(sample_table(3));

        for lang in Language::ALL {
            let text = resolver.get_text(2, lang.code());
            assert_eq!(text.language, lang);
            assert_eq!(text.text, format!("{} text 2", lang.code()));
        }
    }

    #[test]
    fn test_single_entry_fallback() {
        let en = [SeedVerse::new("Text EN", "John 3:16")];
        let am = [SeedVerse::new("Text AM", "John 3:16")];
        let fi = [SeedVerse::new("Text FI", "John 3:16")];
        let table = Arc::new(VerseTable::load(&en, &am, &fi).unwrap());
        let resolver = TableResolver::new(table);

        let text = resolver.get_text(1, "xx");
        assert_eq!(text.text, "Text EN");
        assert_eq!(text.language, Language::En);
    }

    #[test]
    fn test_all_translations_cover_every_language() {
        let resolver = TableResolver::new(sample_table(4));
        for id in 1..=4 {
            let translations = resolver.get_all_translations(id);
            assert!(!translations.en.is_empty());
            assert_eq!(translations.iter().count(), 3);
        }
    }

    #[test]
    fn test_resolver_clamps_ids() {
        let resolver = TableResolver::new(sample_table(4));
        assert_eq!(resolver.get_text(0, "en").text, "en text 1");
        assert_eq!(resolver.get_text(99, "fi").text, "fi text 4");
    }

    proptest! {
        #[test]
        fn test_unsupported_codes_fall_back_to_english(code in "[a-zA-Z-]{0,6}", id in 1u32..=6) {
            prop_assume!(!["en", "am", "fi"].contains(&code.as_str()));
            let resolver = TableResolver::new(sample_table(6));

            let fallback = resolver.get_text(id, &code);
            let english = resolver.get_text(id, "en");
            prop_assert_eq!(fallback.language, Language::En);
            prop_assert_eq!(fallback.text, english.text);
        }
    }
}
