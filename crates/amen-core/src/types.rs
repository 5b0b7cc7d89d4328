use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the verse table carries text for.
///
/// The set is fixed. Anything else a caller asks for resolves to
/// [`Language::En`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the canonical ordering of the dataset
    En,
    /// Amharic
    Am,
    /// Finnish
    Fi,
}

impl Language {
    /// Every supported language, in dataset order.
    pub const ALL: [Self; 3] = [Self::En, Self::Am, Self::Fi];

    /// The fallback used for unsupported codes.
    pub const DEFAULT: Self = Self::En;

    /// Two-letter code used on the wire and in dataset file names.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Am => "am",
            Self::Fi => "fi",
        }
    }

    /// Exact, case-sensitive match against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One `(text, reference)` pair as it appears in a per-language dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedVerse {
    pub text: String,
    pub reference: String,
}

impl SeedVerse {
    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: reference.into(),
        }
    }
}

/// Structured location of a verse, derived from its English reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseMetadata {
    pub verse_id: u32,
    pub book: String,
    pub chapter: u32,
    /// Kept as text: verse numbers may be ranges such as `24-25`.
    pub verse_number: String,
}

/// The text of one verse in every supported language.
///
/// The struct shape guarantees the key set is exactly `{en, am, fi}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub en: String,
    pub am: String,
    pub fi: String,
}

impl Translations {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Am => &self.am,
            Language::Fi => &self.fi,
        }
    }

    /// Iterate `(language, text)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

/// Display text after language resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseText {
    pub text: String,
    /// The language actually served, which may differ from the one requested.
    pub language: Language,
}

/// The outward-facing verse record returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseResponse {
    pub verse_id: u32,
    pub book: String,
    pub chapter: u32,
    pub verse_number: String,
    pub text: String,
    pub language: Language,
    pub translations: Translations,
}

impl VerseResponse {
    /// Human-readable citation, e.g. `Numbers 6:24-25`.
    pub fn citation(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse_number)
    }

    /// The same verse with its display text switched to `language`.
    #[must_use]
    pub fn in_language(mut self, language: Language) -> Self {
        self.text = self.translations.get(language).to_string();
        self.language = language;
        self
    }
}
