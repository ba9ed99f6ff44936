//! Browser LocalStorage store

use super::ScoreStore;

/// Keeps the best score as a decimal string under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "best";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> u32 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score will not persist");
            return 0;
        };

        match storage.get_item(&self.key) {
            Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unreadable best score {:?}", value);
                0
            }),
            _ => 0,
        }
    }

    fn save(&mut self, best: u32) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(&self.key, &best.to_string()).is_ok() {
                log::info!("Best score {} saved", best);
                return;
            }
        }
        log::warn!("Could not save best score {}", best);
    }
}
