//! Parsing of human-readable Bible references such as `1 Peter 5:7`.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<book> <chapter>:<verse>`; the book is matched lazily so that numbered
/// books like `2 Corinthians` keep their leading digit. A single trailing
/// newline is tolerated and not captured.
#[allow(clippy::expect_used)]
static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+(\d+):(.+)\n?$").expect("reference pattern compiles"));

/// A reference split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    pub book: String,
    pub chapter: u32,
    pub verse_number: String,
}

impl ParsedReference {
    /// The value used when a reference does not match the expected shape.
    fn unparsed(reference: &str) -> Self {
        Self {
            book: reference.to_string(),
            chapter: 0,
            verse_number: "0".to_string(),
        }
    }
}

/// Split a reference into book, chapter and verse.
///
/// Never fails. Input that does not look like `<book> <chapter>:<verse>` comes
/// back as `(reference, 0, "0")`.
///
/// ```rust
/// use amen_core::parse_reference;
///
/// let parsed = parse_reference("Numbers 6:24-25");
/// assert_eq!(parsed.book, "Numbers");
/// assert_eq!(parsed.chapter, 6);
/// assert_eq!(parsed.verse_number, "24-25");
///
/// let fallback = parse_reference("Doxology");
/// assert_eq!((fallback.book.as_str(), fallback.chapter), ("Doxology", 0));
/// ```
pub fn parse_reference(reference: &str) -> ParsedReference {
    let Some(caps) = REFERENCE_PATTERN.captures(reference) else {
        return ParsedReference::unparsed(reference);
    };

    // A chapter too large for u32 is treated like any other malformed input.
    let Ok(chapter) = caps[2].parse::<u32>() else {
        return ParsedReference::unparsed(reference);
    };

    ParsedReference {
        book: caps[1].to_string(),
        chapter,
        verse_number: caps[3].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(reference: &str) -> (String, u32, String) {
        let p = parse_reference(reference);
        (p.book, p.chapter, p.verse_number)
    }

    #[test]
    fn test_simple_reference() {
        assert_eq!(parsed("Psalm 23:1"), ("Psalm".into(), 23, "1".into()));
    }

    #[test]
    fn test_numbered_books_keep_their_prefix() {
        assert_eq!(parsed("1 Peter 5:7"), ("1 Peter".into(), 5, "7".into()));
        assert_eq!(
            parsed("2 Corinthians 12:9"),
            ("2 Corinthians".into(), 12, "9".into())
        );
    }

    #[test]
    fn test_verse_ranges_are_preserved() {
        assert_eq!(
            parsed("Numbers 6:24-25"),
            ("Numbers".into(), 6, "24-25".into())
        );
        assert_eq!(
            parsed("Lamentations 3:22\u{2013}23"),
            ("Lamentations".into(), 3, "22\u{2013}23".into())
        );
    }

    #[test]
    fn test_multi_word_books() {
        assert_eq!(
            parsed("Song of Solomon 2:4"),
            ("Song of Solomon".into(), 2, "4".into())
        );
    }

    #[test]
    fn test_unparseable_references_fall_back() {
        for input in ["", "John", "John 3", "John3:16", "John :16", "3:16"] {
            assert_eq!(
                parsed(input),
                (input.to_string(), 0, "0".to_string()),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        assert_eq!(parsed("John 3:16\n"), ("John".into(), 3, "16".into()));
        assert_eq!(parsed("Psalm 23:1-2\n"), ("Psalm".into(), 23, "1-2".into()));
    }

    #[test]
    fn test_chapter_overflow_falls_back() {
        let input = "Psalm 99999999999:1";
        assert_eq!(parsed(input), (input.to_string(), 0, "0".to_string()));
    }

    proptest! {
        #[test]
        fn test_well_formed_references_parse(
            book in "[A-Z][a-z]{1,12}",
            chapter in 1u32..200,
            verse in 1u32..200,
        ) {
            let reference = format!("{book} {chapter}:{verse}");
            let p = parse_reference(&reference);
            prop_assert_eq!(p.book, book);
            prop_assert_eq!(p.chapter, chapter);
            prop_assert_eq!(p.verse_number, verse.to_string());
        }

        #[test]
        fn test_parse_never_panics(input in r".{0,80}") {
            let _ = parse_reference(&input);
        }
    }
}
