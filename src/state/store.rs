// file: src/state/store.rs
// description: file-backed key-value store and the view state entry kept in it
// reference: metadata persistence with json serialization

use crate::error::{DashboardError, Result};
use crate::state::ViewState;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String keys mapped to JSON-encoded string values, kept in one JSON file.
pub struct KeyValueStore {
    storage_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl KeyValueStore {
    /// Opens the store at `storage_path`. A missing or unreadable file
    /// yields an empty store.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let entries = match Self::read_entries(&storage_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read store at {:?}, starting fresh: {}", storage_path, e);
                BTreeMap::new()
            }
        };

        Self {
            storage_path,
            entries,
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            debug!("No existing store file found at {:?}", path);
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path).map_err(|source| DashboardError::Storage {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), value.into());
        self.save()
    }

    pub fn remove(&mut self, key: &str) -> Result<Option<String>> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    fn save(&self) -> Result<()> {
        let storage_err = |source| DashboardError::Storage {
            path: self.storage_path.clone(),
            source,
        };

        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(storage_err)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.storage_path.with_extension("tmp");
        fs::write(&tmp_path, contents).map_err(storage_err)?;
        fs::rename(&tmp_path, &self.storage_path).map_err(storage_err)?;

        debug!("Saved {} store entries to {:?}", self.entries.len(), self.storage_path);
        Ok(())
    }
}

/// The dashboard's view state, stored under a single key.
pub struct ViewStateStore {
    store: KeyValueStore,
    key: String,
}

impl ViewStateStore {
    pub fn new(store: KeyValueStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn open(storage_path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self::new(KeyValueStore::open(storage_path), key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn decode(raw: &str) -> Result<ViewState> {
        serde_json::from_str(raw).map_err(|e| DashboardError::MalformedState(e.to_string()))
    }

    /// Reads the stored state. A corrupt entry is dropped and defaults are
    /// returned; this never fails.
    pub fn load(&mut self) -> ViewState {
        let Some(raw) = self.store.get(&self.key) else {
            debug!("No saved view state under {}", self.key);
            return ViewState::default();
        };

        match Self::decode(raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("Discarding saved view state: {}", e);
                if let Err(e) = self.store.remove(&self.key) {
                    warn!("Failed to remove corrupt view state: {}", e);
                }
                ViewState::default()
            }
        }
    }

    /// Decodes the stored state without touching storage. An absent entry
    /// reads as the defaults; a corrupt one is reported, not removed.
    pub fn peek(&self) -> Result<ViewState> {
        match self.store.get(&self.key) {
            Some(raw) => Self::decode(raw),
            None => Ok(ViewState::default()),
        }
    }

    /// Writes the state; failures are logged and otherwise ignored.
    pub fn persist(&mut self, state: &ViewState) {
        if let Err(e) = self.try_persist(state) {
            warn!("Failed to persist view state: {}", e);
        }
    }

    pub fn try_persist(&mut self, state: &ViewState) -> Result<()> {
        let encoded = serde_json::to_string(state)?;
        self.store.set(self.key.clone(), encoded)
    }

    pub fn raw(&self) -> Option<&str> {
        self.store.get(&self.key)
    }

    pub fn clear(&mut self) -> Result<bool> {
        Ok(self.store.remove(&self.key)?.is_some())
    }
}
