//! File-backed credential storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fieldlink_application::CredentialStorage;
use thiserror::Error;

/// Errors raised while opening or persisting the credential file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No platform config directory could be determined.
    #[error("no config directory available on this platform")]
    NoConfigDir,

    /// The credential file could not be read or written.
    #[error("credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The credential file holds invalid JSON.
    #[error("credential file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Durable-scope backend: a flat JSON object in a file, surviving
/// restarts the way browser local storage survives them.
///
/// Writes go through a temp file and rename, so a crash mid-write
/// leaves the previous file intact. Failed persists are logged and
/// dropped; credential storage must never take the client down.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens (or creates) the credential file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens the credential file at the platform default location,
    /// `<config dir>/fieldlink/credentials.json`.
    ///
    /// # Errors
    ///
    /// Fails when no config directory exists or the file is unreadable.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Self::open(dir.join("fieldlink").join("credentials.json"))
    }

    /// The file this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn mutate(&self, apply: impl FnOnce(&mut HashMap<String, String>)) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        apply(&mut entries);
        if let Err(error) = self.persist(&entries) {
            tracing::warn!(%error, path = %self.path.display(), "failed to persist credentials");
        }
    }
}

impl CredentialStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.mutate(|entries| {
            entries.remove(key);
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("access_token", "A");
        storage.set("refresh_token", "R");
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("access_token").as_deref(), Some("A"));
        assert_eq!(reopened.get("refresh_token").as_deref(), Some("R"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("access_token", "A");
        storage.remove("access_token");
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("access_token"), None);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nested").join("creds.json")).unwrap();
        assert_eq!(storage.get("access_token"), None);
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, b"not json").unwrap();
        assert!(matches!(
            FileStorage::open(&path),
            Err(StorageError::Corrupt(_))
        ));
    }
}
