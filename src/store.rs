//! Persistent key-value store for the portal's state slices.
//!
//! This module provides:
//! - the `KeyValueStore` adapter trait the controller writes through
//! - a file-backed store for native platforms (one JSON file per key)
//! - an in-memory store for WASM and tests
//! - typed load/save helpers for the five persisted slices

use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous string key-value storage, scoped to one portal instance.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// The five persisted slices and their storage keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    CurrentUser,
    Resources,
    Programs,
    Articles,
    SupportRequests,
}

impl Slice {
    pub const ALL: [Slice; 5] = [
        Slice::CurrentUser,
        Slice::Resources,
        Slice::Programs,
        Slice::Articles,
        Slice::SupportRequests,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Slice::CurrentUser => "currentUser",
            Slice::Resources => "resources",
            Slice::Programs => "programs",
            Slice::Articles => "articles",
            Slice::SupportRequests => "supportRequests",
        }
    }
}

/// Read a slice, falling back to `default` when it is absent or unparseable.
pub fn load_slice<T, F>(store: &dyn KeyValueStore, slice: Slice, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = store.get(slice.key()) else {
        tracing::debug!(key = slice.key(), "slice absent, using default");
        return default();
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(err) => {
            tracing::warn!(key = slice.key(), error = %err, "unparseable slice, using default");
            default()
        }
    }
}

/// Write the full snapshot of a slice.
pub fn save_slice<T>(store: &dyn KeyValueStore, slice: Slice, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: slice.key().to_string(),
        source,
    })?;
    store.set(slice.key(), &encoded)
}

// ============================================
// File Store (native platforms)
// ============================================

/// Stores each key as `<key>.json` inside one directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }

    fn io_error(key: &str, source: io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;
        fs::write(self.path_for(key), value).map_err(|e| Self::io_error(key, e))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let file_path = self.path_for(key);
        if file_path.exists() {
            fs::remove_file(file_path).map_err(|e| Self::io_error(key, e))?;
        }
        Ok(())
    }
}

/// Default store directory under the platform's local data dir
pub fn default_store_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("stuhealth").join("store");
    }

    PathBuf::from("cache").join("store")
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

// ============================================
// Memory Store (WASM and tests)
// ============================================

/// Process-wide map backing `MemoryStore::shared`.
static SHARED_MEMORY: Lazy<Arc<Mutex<HashMap<String, String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(HashMap::new())));

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle onto the process-wide map; every handle sees the same entries.
    pub fn shared() -> Self {
        Self {
            entries: SHARED_MEMORY.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// The store a running portal should use on this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store(dir: impl Into<PathBuf>) -> Box<dyn KeyValueStore> {
    Box::new(FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store(_dir: impl Into<PathBuf>) -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::shared())
}
