//! Key-value blob storage backends
//!
//! The session store persists everything as JSON text under string keys.
//! The backend behind those keys is swappable: files on disk for the real
//! application, an in-memory map for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::utils::safe_filename;
use crate::Result;

/// A string-key to JSON-text blob store
pub trait BlobStorage: Send {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys currently present
    fn keys(&self) -> Vec<String>;
}

/// File-backed blob storage: one file per key under a data directory
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", safe_filename(key)))
    }
}

impl BlobStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.blob_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.blob_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.blob_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    if let Some(key) = name.strip_suffix(".json") {
                        keys.push(key.to_string());
                    }
                }
            }
        }
        keys
    }
}

/// In-memory blob storage for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.blobs.keys().cloned().collect()
    }
}
