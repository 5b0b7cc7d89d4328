use amen_core::{Dataset, VerseCoordinator, VerseTable};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Build the verse table from `dataset_dir`, or the built-in dataset when unset.
pub fn load_table(dataset_dir: Option<&Path>) -> Result<Arc<VerseTable>> {
    let origin = dataset_dir.map_or_else(
        || "built-in dataset".to_string(),
        |dir| dir.display().to_string(),
    );
    let table = Dataset::load(dataset_dir)
        .and_then(Dataset::into_table)
        .with_context(|| format!("Failed to load verses from {origin}"))?;
    Ok(Arc::new(table))
}

pub fn load_coordinator(dataset_dir: Option<&Path>) -> Result<VerseCoordinator> {
    load_table(dataset_dir).map(VerseCoordinator::from_table)
}
