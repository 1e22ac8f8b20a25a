//! Local key/value preference storage.
//!
//! The page persists exactly one preference (the selected skin), but the
//! store is a small general key/value capability so the host environment can
//! decide whether anything is persisted at all.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

pub type StoreResult<T> = Result<T, StoreError>;

/// Preference storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed preference file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preference file {0} does not contain a JSON object")]
    NotAnObject(PathBuf),
}

/// A local, synchronous key/value store
pub trait PreferenceStore: fmt::Debug + Send + Sync {
    /// Whether values written here survive a restart
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Preferences kept as a JSON object in a file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/crix/preferences.json`, if a config directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crix").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = self.load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), "discarding unreadable preferences: {}", e);
            Map::new()
        });
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Used when no persistent storage is available. Reads find nothing, writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }
}

/// In-process store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Pick the store for this environment
pub fn open_store(config: &StorageConfig) -> Arc<dyn PreferenceStore> {
    match config.backend {
        StorageBackend::None => {
            tracing::debug!("preference persistence disabled");
            Arc::new(NoopStore)
        }
        StorageBackend::Memory => {
            tracing::debug!("using in-memory preferences");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File => match config.path.clone().or_else(FileStore::default_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using file preferences");
                Arc::new(FileStore::new(path))
            }
            None => {
                tracing::info!("no config directory available, preferences will not persist");
                Arc::new(NoopStore)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let store = FileStore::new(&path);

        assert_eq!(store.get("crix-skin").unwrap(), None);
        store.set("crix-skin", "dark").unwrap();
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("crix-skin").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"other": "value", "crix-skin": "y2k"}"#).unwrap();

        let store = FileStore::new(&path);
        store.set("crix-skin", "terminal").unwrap();

        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("crix-skin").unwrap().as_deref(), Some("terminal"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("crix-skin"), Err(StoreError::Json(_))));

        store.set("crix-skin", "neocities").unwrap();
        assert_eq!(store.get("crix-skin").unwrap().as_deref(), Some("neocities"));
    }

    #[test]
    fn test_file_store_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("crix-skin"), Err(StoreError::NotAnObject(_))));
    }

    #[test]
    fn test_noop_store() {
        let store = NoopStore;
        assert!(!store.is_available());
        store.set("crix-skin", "dark").unwrap();
        assert_eq!(store.get("crix-skin").unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_available());
        store.set("crix-skin", "dark").unwrap();
        store.set("crix-skin", "terminal").unwrap();
        assert_eq!(store.get("crix-skin").unwrap().as_deref(), Some("terminal"));
    }

    #[test]
    fn test_open_store_backends() {
        let dir = TempDir::new().unwrap();

        let none = open_store(&StorageConfig {
            backend: StorageBackend::None,
            path: None,
        });
        assert!(!none.is_available());

        let file = open_store(&StorageConfig {
            backend: StorageBackend::File,
            path: Some(dir.path().join("prefs.json")),
        });
        file.set("crix-skin", "dark").unwrap();
        assert!(dir.path().join("prefs.json").exists());

        let memory = open_store(&StorageConfig {
            backend: StorageBackend::Memory,
            path: None,
        });
        memory.set("crix-skin", "dark").unwrap();
        assert_eq!(memory.get("crix-skin").unwrap().as_deref(), Some("dark"));
    }
}
