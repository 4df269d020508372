//! Storage backends.
//!
//! The cart store persists through this trait rather than a concrete
//! mechanism, so alternate backends substitute without touching the
//! sync contract. Keys are short plain names ("cart"); values are the
//! serialized snapshot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;

/// Keyed string storage shared by every execution context in a profile.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value at `key`. Absent and unreadable both read as `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` at `key`, replacing the whole snapshot atomically.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Write {
            key: key.to_string(),
            reason: "backend lock poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Remove {
            key: key.to_string(),
            reason: "backend lock poisoned".to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }
}

/// File backend: one file per key under a profile directory.
///
/// This is the "single browser profile" equivalent — every process
/// pointed at the same directory shares the same persisted cart.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`. The directory is created lazily
    /// on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The profile directory this backend writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(self.path_for(key), value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load("cart"), None);

        backend.save("cart", "[]").unwrap();
        assert_eq!(backend.load("cart"), Some("[]".to_string()));

        backend.remove("cart").unwrap();
        assert_eq!(backend.load("cart"), None);
    }

    #[test]
    fn test_memory_backend_remove_absent_key() {
        let backend = MemoryBackend::new();
        assert!(backend.remove("cart").is_ok());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());

        assert_eq!(backend.load("cart"), None);

        backend.save("cart", r#"[{"name":"A"}]"#).unwrap();
        assert_eq!(backend.load("cart"), Some(r#"[{"name":"A"}]"#.to_string()));

        // The value lands in one file named after the key.
        assert!(dir.path().join("cart.json").exists());

        backend.remove("cart").unwrap();
        assert_eq!(backend.load("cart"), None);
    }

    #[test]
    fn test_file_backend_creates_profile_dir_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("shop");
        let backend = FileBackend::new(&nested);

        backend.save("cart", "[]").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_file_backend_remove_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.remove("cart").is_ok());
    }

    #[test]
    fn test_file_backend_shared_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileBackend::new(dir.path());
        let reader = FileBackend::new(dir.path());

        writer.save("cart", "[1,2,3]").unwrap();
        assert_eq!(reader.load("cart"), Some("[1,2,3]".to_string()));
    }
}
