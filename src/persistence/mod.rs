//! Best score persistence
//!
//! The simulation only ever raises `best`; the store keeps it between runs.
//! Writes are fire-and-forget: a failed save is logged and forgotten.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};

/// Key-value home for the best score
pub trait ScoreStore {
    /// Stored best score, 0 when nothing usable is stored
    fn load(&self) -> u32;
    /// Store a new best score
    fn save(&mut self, best: u32);
}

/// On-disk record for stores that keep JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best: u32,
}

/// In-memory store that remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: u32,
    pub saves: Vec<u32>,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self {
            best,
            saves: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.saves.push(best);
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) {
        (**self).save(best)
    }
}
