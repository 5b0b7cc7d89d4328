//! Per-language verse datasets on disk and built into the binary.
//!
//! A dataset directory holds one JSON file per language, each an ordered array
//! of `{"text": ..., "reference": ...}` objects:
//!
//! ```text
//! <dir>/en.json
//! <dir>/am.json
//! <dir>/fi.json
//! ```
//!
//! Order matters: position in `en.json` is the verse id, and the other two
//! files must line up with it entry for entry.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Language, Result, SeedVerse, VerseTable};

const BUILTIN_EN: &str = include_str!("../data/en.json");
const BUILTIN_AM: &str = include_str!("../data/am.json");
const BUILTIN_FI: &str = include_str!("../data/fi.json");

/// The three parallel seed lists the verse table is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub english: Vec<SeedVerse>,
    pub amharic: Vec<SeedVerse>,
    pub finnish: Vec<SeedVerse>,
}

impl Dataset {
    /// The dataset compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            english: parse_seeds(BUILTIN_EN, "built-in en.json")?,
            amharic: parse_seeds(BUILTIN_AM, "built-in am.json")?,
            finnish: parse_seeds(BUILTIN_FI, "built-in fi.json")?,
        })
    }

    /// Read `en.json`, `am.json` and `fi.json` from `dir`.
    ///
    /// Lengths are not checked here; [`Dataset::into_table`] does that.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |lang: Language| -> Result<Vec<SeedVerse>> {
            let path = Self::file_path(dir, lang);
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "dataset file {} does not exist",
                    path.display()
                )));
            }
            let content = fs::read_to_string(&path)?;
            parse_seeds(&content, &path.display().to_string())
        };

        let dataset = Self {
            english: read(Language::En)?,
            amharic: read(Language::Am)?,
            finnish: read(Language::Fi)?,
        };
        debug!(
            "Read dataset from {} ({} English entries)",
            dir.display(),
            dataset.english.len()
        );
        Ok(dataset)
    }

    /// Load from `dir` when given, otherwise fall back to the built-in data.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        dir.map_or_else(Self::builtin, Self::from_dir)
    }

    /// Write all three files into `dir`, creating it if needed.
    ///
    /// Each file is written to a temporary sibling first and renamed into place.
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        for lang in Language::ALL {
            write_json_atomic(&Self::file_path(dir, lang), self.seeds(lang))?;
        }
        Ok(())
    }

    /// Path of the file holding `lang` inside a dataset directory.
    pub fn file_path(dir: &Path, lang: Language) -> PathBuf {
        dir.join(format!("{}.json", lang.code()))
    }

    pub fn seeds(&self, lang: Language) -> &[SeedVerse] {
        match lang {
            Language::En => &self.english,
            Language::Am => &self.amharic,
            Language::Fi => &self.finnish,
        }
    }

    /// Number of English entries.
    pub fn len(&self) -> usize {
        self.english.len()
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty()
    }

    /// Append one verse to all three languages at once, keeping them aligned.
    pub fn push(&mut self, reference: &str, english: &str, amharic: &str, finnish: &str) {
        self.english.push(SeedVerse::new(english, reference));
        self.amharic.push(SeedVerse::new(amharic, reference));
        self.finnish.push(SeedVerse::new(finnish, reference));
    }

    /// Build the verse table. Fails on mismatched lengths.
    pub fn into_table(self) -> Result<VerseTable> {
        VerseTable::load(&self.english, &self.amharic, &self.finnish)
    }
}

fn parse_seeds(content: &str, origin: &str) -> Result<Vec<SeedVerse>> {
    serde_json::from_str(content)
        .map_err(|e| Error::Serialization(format!("Failed to parse {origin}: {e}")))
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, format!("{json}\n"))
        .map_err(|e| Error::Storage(format!("Failed to write {}: {e}", tmp_path.display())))?;

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| Error::Storage(format!("Failed to remove {}: {e}", path.display())))?;
    }
    fs::rename(&tmp_path, path)
        .map_err(|e| Error::Storage(format!("Failed to commit {}: {e}", path.display())))?;

    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_dataset_is_aligned() {
        let dataset = Dataset::builtin().unwrap();
        assert!(!dataset.is_empty());
        assert_eq!(dataset.english.len(), dataset.amharic.len());
        assert_eq!(dataset.english.len(), dataset.finnish.len());

        for ((en, am), fi) in dataset
            .english
            .iter()
            .zip(&dataset.amharic)
            .zip(&dataset.finnish)
        {
            assert_eq!(en.reference, am.reference);
            assert_eq!(en.reference, fi.reference);
            assert!(!en.text.is_empty());
            assert!(!am.text.is_empty());
            assert!(!fi.text.is_empty());
        }
    }

    #[test]
    fn test_builtin_references_all_parse() {
        let table = Dataset::builtin().unwrap().into_table().unwrap();
        for record in table.records() {
            assert!(record.metadata.chapter > 0, "{:?}", record.metadata);
        }
    }

    #[test]
    fn test_save_and_reload_directory() {
        let tmp = tempdir().unwrap();
        let mut dataset = Dataset::default();
        dataset.push("John 3:16", "Text EN", "Text AM", "Text FI");
        dataset.push("Psalm 23:1", "Shepherd EN", "Shepherd AM", "Shepherd FI");

        dataset.save_to_dir(tmp.path()).unwrap();
        for lang in Language::ALL {
            assert!(Dataset::file_path(tmp.path(), lang).exists());
        }
        assert!(!tmp.path().join("en.json.tmp").exists());

        let reloaded = Dataset::from_dir(tmp.path()).unwrap();
        assert_eq!(reloaded, dataset);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("en.json"), "[]").unwrap();
        match Dataset::from_dir(tmp.path()) {
            Err(Error::NotFound(msg)) => assert!(msg.contains("am.json")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let tmp = tempdir().unwrap();
        for lang in Language::ALL {
            fs::write(Dataset::file_path(tmp.path(), lang), "[]").unwrap();
        }
        fs::write(tmp.path().join("fi.json"), "{\"text\": 1").unwrap();

        assert!(matches!(
            Dataset::from_dir(tmp.path()),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_mismatched_directory_fails_at_table_build() {
        let tmp = tempdir().unwrap();
        let mut dataset = Dataset::default();
        dataset.push("John 3:16", "a", "b", "c");
        dataset.push("Psalm 23:1", "d", "e", "f");
        dataset.amharic.pop();
        dataset.save_to_dir(tmp.path()).unwrap();

        let reloaded = Dataset::from_dir(tmp.path()).unwrap();
        assert!(matches!(reloaded.into_table(), Err(Error::Config(_))));
    }
}
