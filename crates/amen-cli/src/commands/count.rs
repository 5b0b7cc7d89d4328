//! Count command implementation

use anyhow::Result;
use std::path::Path;

use crate::utils::load_table;

pub fn execute(dataset_dir: Option<&Path>) -> Result<()> {
    let table = load_table(dataset_dir)?;
    println!("{}", table.count());
    Ok(())
}
