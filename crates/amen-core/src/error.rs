//! Error types and handling for amen-core operations.
//!
//! The serving path has a single real failure mode: the per-language datasets
//! disagree in length, which is fatal at startup. Everything else the core does
//! degrades softly (unparseable references, unsupported languages, out-of-range
//! ids) and never reaches this type.
//!
//! The remaining variants cover the ambient work around the core: reading and
//! writing dataset files, persisting the daily blessing, and fetching
//! translations for the import tool.
//!
//! ```rust
//! use amen_core::{Error, VerseTable};
//!
//! match VerseTable::load(&[], &[], &[]) {
//!     Err(Error::Config(msg)) => eprintln!("refusing to start: {msg}"),
//!     Err(e) => eprintln!("unexpected: {e}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// The main error type for amen-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration or dataset shape is invalid.
    ///
    /// Raised when the English, Amharic and Finnish datasets differ in length,
    /// when the English dataset is empty, or when a setting cannot be parsed.
    /// Always fatal: no request should be served after this.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    ///
    /// Covers reading and writing dataset files and the blessing record.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persisting a dataset or blessing record failed.
    ///
    /// Covers the write-to-temp-then-rename dance beyond a bare I/O error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Network operation failed.
    ///
    /// Only the translation fetcher talks to the network.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
