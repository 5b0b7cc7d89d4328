//! Shared helpers for the CLI commands.

pub mod dataset;
pub mod logging;

pub use dataset::{load_coordinator, load_table};
