use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no value stored for '{0}'")]
    NotFound(String),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store '{path}': {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Point-lookup key→bool persistence, one instance per extension.
pub trait KeyValueStore: Send + Sync {
    fn set_value(&self, key: &str, value: bool) -> Result<(), StoreError>;

    /// [`StoreError::NotFound`] when `key` was never set or was cleared.
    fn get_value(&self, key: &str) -> Result<bool, StoreError>;

    /// Removing an absent key succeeds.
    fn clear_value(&self, key: &str) -> Result<(), StoreError>;

    /// Persist anything still buffered.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// Volatile store; forgets everything on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_value(&self, key: &str, value: bool) -> Result<(), StoreError> {
        lock(&self.values).insert(key.to_string(), value);
        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<bool, StoreError> {
        lock(&self.values)
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn clear_value(&self, key: &str) -> Result<(), StoreError> {
        lock(&self.values).remove(key);
        Ok(())
    }
}

/// Store kept as a JSON object on disk, rewritten on every change.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash never leaves a half-written store behind.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, bool>>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, bool>) -> Result<(), StoreError> {
        let io = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io)?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|source| StoreError::Serde {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io)?;
        std::fs::rename(&tmp, &self.path).map_err(io)
    }
}

impl KeyValueStore for JsonFileStore {
    fn set_value(&self, key: &str, value: bool) -> Result<(), StoreError> {
        let mut values = lock(&self.values);
        let previous = values.insert(key.to_string(), value);
        if let Err(e) = self.write(&values) {
            match previous {
                Some(old) => values.insert(key.to_string(), old),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<bool, StoreError> {
        lock(&self.values)
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn clear_value(&self, key: &str) -> Result<(), StoreError> {
        let mut values = lock(&self.values);
        let Some(old) = values.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.write(&values) {
            values.insert(key.to_string(), old);
            return Err(e);
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        let values = lock(&self.values);
        self.write(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_not_found_until_set() {
        let store = MemoryStore::new();
        assert!(matches!(store.get_value("a"), Err(StoreError::NotFound(_))));
        store.set_value("a", true).unwrap();
        assert!(store.get_value("a").unwrap());
        store.clear_value("a").unwrap();
        store.clear_value("a").unwrap();
        assert!(matches!(store.get_value("a"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hideitem.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set_value("item_1", true).unwrap();
        store.set_value("item_2", true).unwrap();
        store.clear_value("item_2").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get_value("item_1").unwrap());
        assert!(matches!(reopened.get_value("item_2"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Serde { .. })));
    }

    #[test]
    fn failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        // The store's parent "directory" is a regular file, so writes fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = JsonFileStore::open(blocker.join("store.json")).unwrap();

        assert!(matches!(store.set_value("x", true), Err(StoreError::Io { .. })));
        assert!(matches!(store.get_value("x"), Err(StoreError::NotFound(_))));
    }
}
