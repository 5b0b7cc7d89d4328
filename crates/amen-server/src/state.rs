use amen_core::{Dataset, Result, VerseCoordinator, VerseTable};
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<VerseCoordinator>,
    table: Arc<VerseTable>,
}

impl AppState {
    pub fn new(table: Arc<VerseTable>) -> Self {
        Self {
            coordinator: Arc::new(VerseCoordinator::from_table(Arc::clone(&table))),
            table,
        }
    }

    pub fn verse_count(&self) -> usize {
        self.table.count()
    }

    /// Load the configured dataset and build the table. Fails on a malformed
    /// or misaligned dataset.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        match &config.dataset_dir {
            Some(dir) => info!("Loading dataset from {}", dir.display()),
            None => info!("Loading built-in dataset"),
        }
        let table = Dataset::load(config.dataset_dir.as_deref())?.into_table()?;
        Ok(Self::new(Arc::new(table)))
    }
}
