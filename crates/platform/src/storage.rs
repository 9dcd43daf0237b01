//! Key/value persistence.
//!
//! The game only ever stores two independent flags, so the storage seam is a
//! tiny string map. `JsonFileStore` keeps it in one JSON file written through
//! a temp file and rename; `MemoryStore` backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage is read-only")]
    ReadOnly,
}

/// Injected persistence capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// String map persisted as a JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl JsonFileStore {
    /// Open `path`, creating nothing until the first write.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match Self::read(&path) {
            Ok(Some(doc)) => {
                log::info!("loaded {} stored values from {}", doc.entries.len(), path.display());
                doc
            }
            Ok(None) => StoreDocument::default(),
            Err(e) => {
                log::warn!("ignoring unreadable store {}: {e}", path.display());
                StoreDocument::default()
            }
        };
        Self { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<Option<StoreDocument>, StoreError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.doc)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.doc.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.doc.entries.insert(key.to_string(), value.to_string());
        if previous.as_deref() == Some(value) {
            return Ok(());
        }
        if let Err(e) = self.write() {
            // Only persisted values may stay cached.
            match previous {
                Some(old) => self.doc.entries.insert(key.to_string(), old),
                None => self.doc.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// In-memory store. Can be made read-only to exercise write failures.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
