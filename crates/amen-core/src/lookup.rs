//! Selecting which verse to serve.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::{VerseMetadata, VerseTable};

/// Resolves verse ids to metadata, or picks one at random.
pub trait VerseLookup: Send + Sync {
    /// A uniformly random verse from `[1, count]`.
    fn get_random(&self) -> VerseMetadata;

    /// The verse with `requested_id`, clamped into `[1, count]`. Never fails.
    fn get_by_id(&self, requested_id: i64) -> VerseMetadata;
}

/// [`VerseLookup`] backed by the shared [`VerseTable`].
///
/// By default randomness comes from `rand::thread_rng`, which is per-thread and
/// needs no coordination between concurrent requests. [`TableLookup::with_seed`]
/// swaps in a single seeded generator behind a mutex for reproducible draws.
pub struct TableLookup {
    table: Arc<VerseTable>,
    seeded: Option<Mutex<StdRng>>,
}

impl TableLookup {
    pub fn new(table: Arc<VerseTable>) -> Self {
        Self {
            table,
            seeded: None,
        }
    }

    /// Deterministic variant; two lookups with the same seed draw the same ids.
    pub fn with_seed(table: Arc<VerseTable>, seed: u64) -> Self {
        Self {
            table,
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn random_id(&self) -> u32 {
        let max = self.table.max_id();
        match &self.seeded {
            Some(rng) => {
                // A poisoned generator is still a usable generator.
                let mut rng = rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                rng.gen_range(1..=max)
            },
            None => rand::thread_rng().gen_range(1..=max),
        }
    }
}

impl VerseLookup for TableLookup {
    fn get_random(&self) -> VerseMetadata {
        let verse_id = self.random_id();
        self.table.metadata_of(verse_id).clone()
    }

    fn get_by_id(&self, requested_id: i64) -> VerseMetadata {
        let verse_id = self.table.clamp_id(requested_id);
        self.table.metadata_of(verse_id).clone()
    }
}
