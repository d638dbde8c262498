//! Storage port and backends.
//!
//! The store persists through this narrow key-value seam so alternative
//! backends (browser storage, embedded database) can be swapped in without
//! touching store logic.

use crate::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Durable key-value storage for serialized carts.
pub trait CartStorage {
    /// Read the value stored under a key, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value under a key, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage. State lives only as long as the process; useful for
/// tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at a directory. The directory is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory files are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Storage(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Storage(e.to_string()))
    }
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));

        storage.write("cart", "[1]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_memory_keys_are_independent() {
        let storage = MemoryStorage::new();
        storage.write("a", "1").unwrap();
        assert_eq!(storage.read("b").unwrap(), None);
    }

    #[test]
    fn test_file_missing_key_is_absent() {
        let storage = FileStorage::new(std::env::temp_dir().join("bloom-store-missing"));
        assert!(storage.read("never-written").unwrap().is_none());
    }

    #[test]
    fn test_file_roundtrip() {
        let root = std::env::temp_dir().join(format!("bloom-store-rt-{}", std::process::id()));
        let storage = FileStorage::new(&root);

        storage.write("cart", r#"{"items":[]}"#).unwrap();
        assert_eq!(
            storage.read("cart").unwrap().as_deref(),
            Some(r#"{"items":[]}"#)
        );

        fs::remove_dir_all(&root).ok();
    }
}
