//! Key-value persistence backends.
//!
//! The store only needs string values under a handful of logical keys.
//! [`FileBackend`] keeps them in a single JSON object on disk;
//! [`MemoryBackend`] keeps them in memory for tests.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DrygError, Result};

/// A string key-value store.
pub trait KeyValueBackend {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every write fail, as a full disk would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw value currently held for `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(DrygError::Io(std::io::Error::other("write rejected")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend storing all keys in one JSON object file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// File name used inside the data directory.
    pub const FILE_NAME: &'static str = "store.json";

    /// Create a backend for an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a backend inside a data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. `key` names the value being read for errors.
    fn read_map(&self, key: &str) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let message = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => return Ok(map),
            Ok(_) => "expected a JSON object".to_string(),
            Err(e) => e.to_string(),
        };
        Err(DrygError::StoreParseError {
            key: key.to_string(),
            message: format!("{}: {}", self.path.display(), message),
        })
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map(key)?;
        Ok(match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
    }

    /// Write using the write-to-temp-then-rename pattern.
    ///
    /// A corrupted file is replaced rather than merged into.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map(key).unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable store file: {}", e);
            Map::new()
        });
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| DrygError::Other(e.into()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
