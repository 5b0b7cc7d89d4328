//! English candidate verses scraped from a topical verse page.
//!
//! Verse containers (`div.verse-box`, `div.single-verse`, `blockquote`) are
//! read first, taking the text and citation from their children. Only when no
//! container yields a verse are paragraphs and list items matched against the
//! `"text" - Reference` and `Reference - "text"` shapes.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Url};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::fetcher::http_client;
use crate::{Error, Result, SeedVerse};

static VERSE_CONTAINERS: Lazy<Selector> =
    Lazy::new(|| selector("div.verse-box, div.single-verse, blockquote"));
static CONTAINER_TEXT: Lazy<Selector> = Lazy::new(|| selector(".verse-text, .text, p"));
static CONTAINER_REFERENCE: Lazy<Selector> = Lazy::new(|| {
    selector(".verse-reference, .reference, cite, strong, a[href*='bible']")
});
static LOOSE_LINES: Lazy<Selector> = Lazy::new(|| selector("p, li"));

/// `"text" - Reference`, with straight or curly quotes and any dash.
#[allow(clippy::expect_used)]
static TEXT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^["\x{201C}\x{201D}](.+?)["\x{201C}\x{201D}]\s*[-\x{2013}\x{2014}]\s*(.+\d+:\d+.*)$"#)
        .expect("text-first pattern compiles")
});

/// `Reference - text`, the text optionally quoted.
#[allow(clippy::expect_used)]
static REFERENCE_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(.+\d+:\d+[^"\x{201C}\x{201D}]*?)\s*[-\x{2013}\x{2014}]\s*["\x{201C}\x{201D}]?(.+?)["\x{201C}\x{201D}]?$"#,
    )
    .expect("reference-first pattern compiles")
});

#[allow(clippy::expect_used)]
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector parses")
}

/// Downloads a page and extracts `(text, reference)` candidates from it.
pub struct VerseScraper {
    client: Client,
}

impl VerseScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http_client()?,
        })
    }

    /// Fetch `url` and extract its verses. A non-success status is an error.
    pub async fn scrape(&self, url: &str) -> Result<Vec<SeedVerse>> {
        let url = Url::parse(url)
            .map_err(|e| Error::Config(format!("Invalid page URL '{url}': {e}")))?;

        debug!("GET {}", url);
        let body = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let verses = extract_verses(&body);
        info!("Scraped {} verses from {}", verses.len(), url);
        Ok(verses)
    }
}

/// Extract candidates from an HTML document.
///
/// Containers missing either a text or a reference are skipped.
pub fn extract_verses(html: &str) -> Vec<SeedVerse> {
    let document = Html::parse_document(html);

    let verses: Vec<SeedVerse> = document
        .select(&VERSE_CONTAINERS)
        .filter_map(|element| {
            let text = container_text(element);
            let reference = container_reference(element);
            (!text.is_empty() && !reference.is_empty()).then(|| SeedVerse::new(text, reference))
        })
        .collect();

    if !verses.is_empty() {
        return verses;
    }

    debug!("No verse containers found; scanning paragraphs and list items");
    document
        .select(&LOOSE_LINES)
        .filter_map(|element| parse_verse_line(&text_of(element)))
        .collect()
}

/// Split a single line of prose into text and reference.
///
/// ```rust
/// use amen_core::maintenance::parse_verse_line;
///
/// let line = "\u{201C}Be still, and know that I am God\u{201D} \u{2013} Psalm 46:10";
/// let verse = parse_verse_line(line).unwrap();
/// assert_eq!(verse.text, "Be still, and know that I am God");
/// assert_eq!(verse.reference, "Psalm 46:10");
/// ```
pub fn parse_verse_line(line: &str) -> Option<SeedVerse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = TEXT_FIRST.captures(line) {
        return Some(SeedVerse::new(caps[1].trim(), caps[2].trim()));
    }
    REFERENCE_FIRST
        .captures(line)
        .map(|caps| SeedVerse::new(caps[2].trim(), caps[1].trim()))
}

fn container_text(element: ElementRef<'_>) -> String {
    element
        .select(&CONTAINER_TEXT)
        .next()
        .map_or_else(|| text_of(element), text_of)
}

fn container_reference(element: ElementRef<'_>) -> String {
    element
        .select(&CONTAINER_REFERENCE)
        .next()
        .map(text_of)
        .unwrap_or_default()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
