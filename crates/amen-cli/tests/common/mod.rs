#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// An `amen` command with blessings stored under `data_dir` and colors off.
///
/// Dataset and logging variables from the caller's environment are cleared so
/// runs always start from the built-in verses.
pub fn amen_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("amen"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("AMEN_DATA_DIR", data_dir);
    cmd.env_remove("AMEN_DATASET_DIR");
    cmd.env_remove("AMEN_OUTPUT_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a small aligned dataset directory with the given references.
#[allow(dead_code)]
pub fn write_dataset(dir: &Path, references: &[&str]) {
    for code in ["en", "am", "fi"] {
        let entries: Vec<serde_json::Value> = references
            .iter()
            .map(|reference| {
                serde_json::json!({
                    "text": format!("{code} {reference}"),
                    "reference": reference,
                })
            })
            .collect();
        std::fs::write(
            dir.join(format!("{code}.json")),
            serde_json::to_string_pretty(&entries).unwrap(),
        )
        .expect("write dataset file");
    }
}
