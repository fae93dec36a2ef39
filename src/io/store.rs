use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::io::lock::{LockError, StoreLock};
use crate::io::log::log_store_failure;
use crate::model::board::Board;
use crate::model::item::ChecklistItem;
use crate::model::location::Location;

/// Storage key for the location list (`locations.json`).
pub const LOCATIONS_KEY: &str = "locations";
/// Storage key for the checklist items (`items.json`).
pub const ITEMS_KEY: &str = "items";

/// Error type for store write operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode store data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// JSON-backed store. Each key maps to one pretty-printed `<key>.json` file
/// in the store directory; writes land atomically and are serialized across
/// processes by an advisory lock.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load the list stored under `key`.
    ///
    /// A missing file is a fresh start and returns `None` silently. A file
    /// that cannot be read or decoded also returns `None`, but the failure
    /// is logged so hand-edited data is not lost without a trace.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log_store_failure(&self.dir, &format!("load {}", key), &e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(values) => Some(values),
            Err(e) => {
                log_store_failure(&self.dir, &format!("decode {}", key), &e);
                None
            }
        }
    }

    /// Write the list under `key` as pretty-printed JSON.
    pub fn store<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;
        let json = serde_json::to_string_pretty(values)?;

        let _lock = StoreLock::acquire_default(&self.dir)?;
        let path = self.key_path(key);
        atomic_write(&path, json.as_bytes()).map_err(|e| StoreError::Write {
            path: path.clone(),
            source: e,
        })
    }

    pub fn load_locations(&self) -> Option<Vec<Location>> {
        self.load(LOCATIONS_KEY)
    }

    pub fn load_items(&self) -> Option<Vec<ChecklistItem>> {
        self.load(ITEMS_KEY)
    }

    pub fn save_locations(&self, locations: &[Location]) -> Result<(), StoreError> {
        self.store(LOCATIONS_KEY, locations)
    }

    pub fn save_items(&self, items: &[ChecklistItem]) -> Result<(), StoreError> {
        self.store(ITEMS_KEY, items)
    }

    /// Load both lists into a board, substituting empty lists where nothing
    /// has been stored yet.
    pub fn load_board(&self) -> Board {
        Board {
            locations: self.load_locations().unwrap_or_default(),
            items: self.load_items().unwrap_or_default(),
        }
    }
}

/// Write content to a file atomically: write to a temp file in the same
/// directory, then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
