//! Storage backend trait and implementations

use crate::error::{Result, TodoError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Synchronous key-value storage backend.
///
/// The store writes the entire serialized todo list under one fixed
/// key; `set` must fully overwrite any prior value.
pub trait TodoStorage {
    /// Store `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
}

/// File-based storage: one `{key}.json` file per key under a base
/// directory.
#[derive(Clone)]
pub struct FileTodoStorage {
    base_path: PathBuf,
}

impl FileTodoStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl TodoStorage for FileTodoStorage {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let path = self.key_path(key);
        fs::write(&path, value)?;
        tracing::debug!(key, path = %path.display(), "wrote storage value");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(contents))
    }
}

/// In-memory storage, cloneable so several handles share one backing
/// map. Used by tests and as a stand-in for an environment-provided
/// key-value store.
#[derive(Clone, Default)]
pub struct MemoryTodoStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTodoStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStorage for MemoryTodoStorage {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| TodoError::Storage("storage mutex poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .inner
            .lock()
            .map_err(|_| TodoError::Storage("storage mutex poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_set_and_get() {
        let dir = tempdir().unwrap();
        let storage = FileTodoStorage::new(dir.path());

        storage.set("todos", "[]").unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_missing_key() {
        let dir = tempdir().unwrap();
        let storage = FileTodoStorage::new(dir.path());

        assert!(storage.get("todos").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileTodoStorage::new(dir.path());

        storage.set("todos", "first").unwrap();
        storage.set("todos", "second").unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_storage_creates_base_dir() {
        let dir = tempdir().unwrap();
        let storage = FileTodoStorage::new(dir.path().join("nested"));

        storage.set("todos", "[]").unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_storage_shares_backing_map() {
        let storage = MemoryTodoStorage::new();
        let other = storage.clone();

        storage.set("todos", "[]").unwrap();
        assert_eq!(other.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryTodoStorage::new();
        assert!(storage.get("anything").unwrap().is_none());
    }
}
