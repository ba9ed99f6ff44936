//! JSON file store for native builds

use std::path::PathBuf;

use super::{BestRecord, ScoreStore};

/// Keeps the best score as `{"best": n}` in a file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> std::io::Result<BestRecord> {
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self, record: BestRecord) -> std::io::Result<()> {
        let json = serde_json::to_string(&record)?;
        std::fs::write(&self.path, json)
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(record) => {
                log::info!("Loaded best score {} from {}", record.best, self.path.display());
                record.best
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Could not read best score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        match self.write(BestRecord { best }) {
            Ok(()) => log::info!("Best score {} saved", best),
            Err(e) => log::warn!("Could not save best score to {}: {}", self.path.display(), e),
        }
    }
}
