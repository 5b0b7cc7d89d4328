//! Persistence of the verse a user said "Amen" to.
//!
//! A blessing is locked for the rest of the calendar day it was accepted on.
//! Only one record is kept, under a fixed file name in the data directory; a
//! record from an earlier day is treated as if it were not there.

use chrono::{DateTime, Local, TimeZone, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::dataset::write_json_atomic;
use crate::{Error, Result, VerseResponse};

/// File name of the single stored blessing.
pub const BLESSING_FILE: &str = "last_blessing_data.json";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "AMEN_DATA_DIR";

/// A verse accepted at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlessingRecord {
    pub timestamp: DateTime<Utc>,
    pub verse: VerseResponse,
}

impl BlessingRecord {
    /// Whether this record was accepted on the same calendar day as `now`,
    /// judged in `now`'s time zone.
    pub fn is_same_day<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.timestamp.with_timezone(&now.timezone()).date_naive() == now.date_naive()
    }
}

/// Reads and writes the daily blessing record.
pub struct BlessingStore {
    dir: PathBuf,
}

impl BlessingStore {
    /// Store rooted at `AMEN_DATA_DIR`, or the platform data directory.
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(Self::with_dir(PathBuf::from(dir)));
        }

        let dirs = ProjectDirs::from("org", "amen", "amen")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(Self::with_dir(dirs.data_dir().to_path_buf()))
    }

    pub const fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(BLESSING_FILE)
    }

    /// Today's blessing, if one was locked in today.
    ///
    /// Stale, missing and unreadable records all come back as `None`.
    pub fn load_today(&self, now: DateTime<Local>) -> Option<BlessingRecord> {
        self.load_for_day(&now)
    }

    /// Same as [`BlessingStore::load_today`], for any time zone.
    pub fn load_for_day<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<BlessingRecord> {
        let path = self.path();
        let raw = fs::read_to_string(&path).ok()?;

        let record: BlessingRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring unreadable blessing at {}: {e}", path.display());
                return None;
            },
        };

        if record.is_same_day(now) {
            Some(record)
        } else {
            debug!("Stored blessing from {} is not from today", record.timestamp);
            None
        }
    }

    /// Lock `verse` as the blessing for the day containing `now`.
    pub fn lock(&self, verse: VerseResponse, now: DateTime<Utc>) -> Result<BlessingRecord> {
        fs::create_dir_all(&self.dir)?;
        let record = BlessingRecord {
            timestamp: now,
            verse,
        };
        write_json_atomic(&self.path(), &record)?;
        debug!("Locked verse {} as today's blessing", record.verse.verse_id);
        Ok(record)
    }
}
