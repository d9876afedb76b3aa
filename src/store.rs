// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Injectable key-value persistence capability.
//!
//! History, favorites, and the theme preference all live in a durable
//! string-keyed store. The core never talks to a concrete backend directly -
//! it goes through [`KvStore`], so every consumer is testable against
//! [`MemoryStore`] and the CLI wires up [`FileStore`].
//!
//! Reads degrade: a missing, unreadable, or corrupt backing file yields an
//! empty store rather than an error, because losing a preferences file must
//! never take the directory down with it. Writes report [`StoreError`];
//! whether to surface that is the caller's policy, and the search core
//! deliberately ignores it.
//!
//! Access is read-modify-write with no locking. A single active session per
//! store is assumed; concurrent writers can lose updates.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// String-keyed durable storage capability.
pub trait KvStore {
    /// Read the value under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`, if present.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Failure writing to a durable store.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be written.
    Io { path: PathBuf, source: io::Error },
    /// Store contents could not be serialized.
    Serialize { source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "failed to write store file {}: {}", path.display(), source)
            }
            StoreError::Serialize { source } => {
                write!(f, "failed to serialize store contents: {}", source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Serialize { source } => Some(source),
        }
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per file, rewritten on every mutation.
///
/// The whole map is held in memory; `open` parses the file once and degrades
/// to empty on any read or parse failure.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open (or create on first write) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        FileStore { path, entries }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| StoreError::Serialize { source })?;
        fs::write(&self.path, payload).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Read a JSON string-list payload, degrading to empty on malformed input.
pub(crate) fn read_string_list(store: &dyn KvStore, key: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist a string list as a JSON payload. Write failures are the
/// persistence layer's concern, not the core's; they are dropped here.
pub(crate) fn write_string_list(store: &mut dyn KvStore, key: &str, list: &[String]) {
    if let Ok(payload) = serde_json::to_string(list) {
        let _ = store.set(key, &payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_string_list_round_trip() {
        let mut store = MemoryStore::new();
        let list = vec!["a".to_string(), "b".to_string()];
        write_string_list(&mut store, "list", &list);
        assert_eq!(read_string_list(&store, "list"), list);
    }

    #[test]
    fn test_malformed_payload_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set("list", "not json at all").unwrap();
        assert!(read_string_list(&store, "list").is_empty());

        store.set("list", "{\"wrong\": \"shape\"}").unwrap();
        assert!(read_string_list(&store, "list").is_empty());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileStore::open("/nonexistent/waymark-prefs.json");
        assert_eq!(store.get("anything"), None);
    }
}
