//! # amen-core
//!
//! Core functionality for Amen, a daily Bible verse service in English, Amharic
//! and Finnish.
//!
//! The crate owns an immutable table of verses built from three parallel
//! datasets, and the small pipeline that turns a request into a response:
//!
//! - **Lookup**: pick a verse at random or by (clamped) id
//! - **Language resolution**: map a requested code to a supported language,
//!   falling back to English
//! - **Formatting**: merge metadata, resolved text and all translations
//! - **Blessings**: remember the verse a user accepted for the rest of the day
//! - **Maintenance**: scrape candidate verses from a page, deduplicate them and
//!   import them with fetched translations
//!
//! ## Quick Start
//!
//! ```rust
//! use amen_core::{Dataset, VerseCoordinator};
//! use std::sync::Arc;
//!
//! let table = Arc::new(Dataset::builtin()?.into_table()?);
//! let coordinator = VerseCoordinator::from_table(table);
//!
//! let verse = coordinator.get_verse_by_id(2, "fi");
//! assert_eq!(verse.verse_id, 2);
//! assert_eq!(verse.language.code(), "fi");
//! # Ok::<(), amen_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Lookups themselves never
//! fail: out-of-range ids are clamped and unknown languages fall back.

/// Daily blessing persistence
pub mod blessing;
/// Request pipeline wiring lookup, resolution and formatting
pub mod coordinator;
/// Dataset files and the built-in dataset
pub mod dataset;
/// Error types and result aliases
pub mod error;
/// Response assembly
pub mod formatter;
/// Language selection with English fallback
pub mod language;
/// Random and by-id verse selection
pub mod lookup;
/// Page scraping, dataset deduplication and translation import
pub mod maintenance;
/// Reference string parsing
pub mod reference;
/// The loaded verse table
pub mod store;
/// Core data types and structures
pub mod types;

#[cfg(test)]
mod test_support;

pub use blessing::{BlessingRecord, BlessingStore};
pub use coordinator::VerseCoordinator;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use formatter::{ResponseFormatter, VerseFormatter};
pub use language::{LanguageResolver, TableResolver, resolve_language};
pub use lookup::{TableLookup, VerseLookup};
pub use reference::{ParsedReference, parse_reference};
pub use store::{VerseRecord, VerseTable};
pub use types::*;
