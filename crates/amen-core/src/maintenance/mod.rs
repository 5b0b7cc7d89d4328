//! Dataset maintenance: page scraping, duplicate detection and translation
//! import.

mod dedup;
mod fetcher;
mod importer;
mod page_scraper;

pub use dedup::{DedupOutcome, deduplicate, normalize_reference};
pub use fetcher::{AMHARIC_API_BASE, FINNISH_API_BASE, TranslationFetcher};
pub use importer::{DEFAULT_DELAY, ImportReport, Importer};
pub use page_scraper::{VerseScraper, extract_verses, parse_verse_line};
