//! Best score tracking and persistence
//!
//! A single counter that survives sessions. Stored as a plain JSON integer
//! under the `best-score` key (LocalStorage) or in a file (native).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for the best score
pub trait ScoreStore {
    /// Stored best, or `None` if nothing was saved yet
    fn read_best(&self) -> Result<Option<u64>, StoreError>;
    fn write_best(&mut self, value: u64) -> Result<(), StoreError>;
}

/// Process-lifetime store (tests, native runs without a save path)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u64) -> Self {
        Self { value: Some(value) }
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.value)
    }

    fn write_best(&mut self, value: u64) -> Result<(), StoreError> {
        self.value = Some(value);
        Ok(())
    }
}

/// Best score kept in a small file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileStore {
    fn read_best(&self) -> Result<Option<u64>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(text.trim())?))
    }

    fn write_best(&mut self, value: u64) -> Result<(), StoreError> {
        std::fs::write(&self.path, serde_json::to_string(&value)?)?;
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "best-score";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("no LocalStorage".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read_best(&self) -> Result<Option<u64>, StoreError> {
        let item = Self::storage()?
            .get_item(Self::STORAGE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        match item {
            Some(text) => Ok(Some(serde_json::from_str(text.trim())?)),
            None => Ok(None),
        }
    }

    fn write_best(&mut self, value: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(Self::STORAGE_KEY, &serde_json::to_string(&value)?)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

/// The best score for this process, backed by a store
pub struct BestScore {
    value: u64,
    store: Box<dyn ScoreStore>,
}

impl BestScore {
    /// Load from the store. Missing or unreadable values count as 0.
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let value = match store.read_best() {
            Ok(Some(value)) => {
                log::info!("Loaded best score: {}", value);
                value
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read best score, starting from 0: {}", e);
                0
            }
        };
        Self { value, store }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Record a score. Persists and returns true only on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(e) = self.store.write_best(score) {
            log::warn!("Could not save best score {}: {}", score, e);
        }
        true
    }
}

impl std::fmt::Debug for BestScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestScore").field("value", &self.value).finish()
    }
}
