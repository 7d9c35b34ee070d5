//! Session-scoped key-value storage for sidebar state.
//!
//! The navigator only needs a tiny string store with `get`/`set`/`delete`:
//! `MemorySessionStore` keeps values in memory for embedding and tests, and
//! `FileSessionStore` persists them as JSON in the standard configuration
//! directory (`~/.config/booknav/session.json` on most platforms) so a pair
//! of CLI invocations behaves like two page loads in one browsing session.
//! Both are safe to share across threads thanks to the internal `Mutex`.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use thiserror::Error;
use tracing::warn;

/// Environment variable allowing callers to override the session file path.
pub const SESSION_PATH_ENV: &str = "BOOKNAV_SESSION_PATH";

/// Default filename for the JSON payload.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Error surfaced when reading or writing session state fails.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Session-scoped string key-value storage.
///
/// Implementations are injected into the navigator, keeping the scroll
/// persistence logic testable without a real browsing session.
pub trait SessionStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    /// Removes the value stored under `key`, if any.
    fn delete(&self, key: &str) -> Result<(), SessionStoreError>;
}

/// In-memory store used for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.lock().expect("session lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values
            .lock()
            .expect("session lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        self.values.lock().expect("session lock poisoned").remove(key);
        Ok(())
    }
}

/// JSON-file-backed store persisting session state between invocations.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Opens the store at the default path (honoring [`SESSION_PATH_ENV`]).
    pub fn open_default() -> Result<Self, SessionStoreError> {
        Self::open(default_session_path())
    }

    /// Opens a store rooted at the provided path, loading any existing
    /// payload. A corrupt payload is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let path = path.into();
        let values = load_values(&path)?;
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_locked(&self, values: &HashMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.lock().expect("session lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut values = self.values.lock().expect("session lock poisoned");
        values.insert(key.to_string(), value.to_string());
        self.save_locked(&values)
    }

    fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        let mut values = self.values.lock().expect("session lock poisoned");
        if values.remove(key).is_some() {
            self.save_locked(&values)?;
        }
        Ok(())
    }
}

fn default_session_path() -> PathBuf {
    if let Ok(path) = env::var(SESSION_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("booknav")
        .join(SESSION_FILE_NAME)
}

fn load_values(path: &Path) -> Result<HashMap<String, String>, SessionStoreError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(values) => Ok(values),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse session file; starting with an empty session"
                );
                Ok(HashMap::new())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(error) => Err(SessionStoreError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSessionStore, MemorySessionStore, SESSION_PATH_ENV, SessionStore, default_session_path};

    #[test]
    fn memory_store_roundtrips_values() {
        let store = MemorySessionStore::new();
        assert!(store.get("sidebar-scroll").expect("get succeeds").is_none());

        store.set("sidebar-scroll", "120").expect("set succeeds");
        assert_eq!(store.get("sidebar-scroll").expect("get succeeds").as_deref(), Some("120"));

        store.delete("sidebar-scroll").expect("delete succeeds");
        assert!(store.get("sidebar-scroll").expect("get succeeds").is_none());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).expect("open succeeds");
        store.set("sidebar-scroll", "42").expect("set succeeds");
        drop(store);

        let reopened = FileSessionStore::open(&path).expect("reopen succeeds");
        assert_eq!(reopened.get("sidebar-scroll").expect("get succeeds").as_deref(), Some("42"));

        reopened.delete("sidebar-scroll").expect("delete succeeds");
        let again = FileSessionStore::open(&path).expect("third open succeeds");
        assert!(again.get("sidebar-scroll").expect("get succeeds").is_none());
    }

    #[test]
    fn corrupt_session_file_yields_empty_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").expect("write corrupt payload");

        let store = FileSessionStore::open(&path).expect("open tolerates corrupt payload");
        assert!(store.get("sidebar-scroll").expect("get succeeds").is_none());
    }

    #[test]
    fn environment_variable_overrides_default_path() {
        temp_env::with_var(SESSION_PATH_ENV, Some("/tmp/custom-session.json"), || {
            assert_eq!(default_session_path().to_string_lossy(), "/tmp/custom-session.json");
        });
    }
}
