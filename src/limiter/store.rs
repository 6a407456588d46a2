//! Persistent storage for the last-conversion timestamp.
//!
//! The limiter needs exactly one durable slot: the millisecond timestamp of
//! the most recent successful split. The slot is modeled as a trait so the
//! production file-backed store and the in-memory test store are
//! interchangeable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the persisted slot. The value is a stringified millisecond
/// timestamp.
pub const STORAGE_KEY: &str = "csv_last_conversion";

/// Errors from reading or writing the timestamp slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not determine a data directory for rate limit state")]
    NoDataDir,

    #[error("Failed to access rate limit state: {0}")]
    Io(#[from] io::Error),
}

/// A durable slot holding the last-conversion timestamp.
pub trait StateStore {
    /// Reads the stored timestamp, `None` when nothing has been recorded.
    fn load(&self) -> Result<Option<i64>, StoreError>;

    /// Unconditionally overwrites the slot.
    fn save(&mut self, timestamp_ms: i64) -> Result<(), StoreError>;

    /// Clears the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Store backed by a single file under the platform data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the default per-user store (`<data dir>/csvpart/csv_last_conversion`).
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_local_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("csvpart");
        Ok(Self {
            path: dir.join(STORAGE_KEY),
        })
    }

    /// Opens a store at an explicit path. Used by tests and respected by the
    /// CLI when `CSVPART_STATE_DIR` is set.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<i64>, StoreError> {
        match fs::read_to_string(&self.path) {
            // A slot that fails to parse is treated as absent
            Ok(raw) => Ok(raw.trim().parse::<i64>().ok()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, timestamp_ms: i64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, timestamp_ms.to_string())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Volatile store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<i64>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, timestamp_ms: i64) -> Result<(), StoreError> {
        self.value = Some(timestamp_ms);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.value = None;
        Ok(())
    }
}
