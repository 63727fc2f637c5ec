//! Persisted key/value flag store
//!
//! A small JSON file of string flags in the per-user data directory. Reads
//! happen once at open; writes go straight through to disk.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from flag store persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("flag store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("flag store serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk string flag store
///
/// A missing or malformed backing file reads as an empty store; persistence
/// problems only surface on write.
pub struct FlagStore {
    path: Option<PathBuf>,
    flags: HashMap<String, String>,
}

impl FlagStore {
    /// Get the default store file path
    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "turnstile", "turnstile-tui")
            .map(|dirs| dirs.data_dir().join("flags.json"))
    }

    /// Open the store at the default per-user data path
    ///
    /// When no per-user directory can be resolved the store still works,
    /// it just forgets everything on exit.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_from(Self::default_path())
    }

    /// Open the store backed by a specific file
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_from(Some(path.into()))
    }

    fn open_from(path: Option<PathBuf>) -> Result<Self, StoreError> {
        let mut flags = HashMap::new();

        if let Some(path) = &path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                match serde_json::from_str(&content) {
                    Ok(parsed) => flags = parsed,
                    Err(err) => {
                        tracing::warn!(
                            "Flag store at {} is malformed, starting empty: {err}",
                            path.display()
                        );
                    }
                }
            }
        }

        Ok(Self { path, flags })
    }

    /// Read a flag value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }

    /// Set a flag and persist the store
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.flags.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// Remove a flag and persist the store
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.flags.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&self.flags)?;
            fs::write(path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FlagStore::open_at(dir.path().join("flags.json")).unwrap();
        assert_eq!(store.get("isLoggedIn"), None);
    }

    #[test]
    fn test_set_then_reopen_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("isLoggedIn", "1").unwrap();

        let reopened = FlagStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("isLoggedIn"), Some("1"));
    }

    #[test]
    fn test_set_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(&path, "not json at all {").unwrap();

        let store = FlagStore::open_at(&path).unwrap();
        assert_eq!(store.get("isLoggedIn"), None);
    }

    #[test]
    fn test_malformed_file_is_replaced_on_next_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(&path, "not json at all {").unwrap();

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("isLoggedIn", "1").unwrap();

        let reopened = FlagStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("isLoggedIn"), Some("1"));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Some("light"));

        let reopened = FlagStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("theme"), Some("light"));
    }

    #[test]
    fn test_remove_deletes_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        store.remove("isLoggedIn").unwrap();
        assert_eq!(store.get("isLoggedIn"), None);

        let reopened = FlagStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("isLoggedIn"), None);
    }

    #[test]
    fn test_remove_of_absent_key_does_not_touch_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.remove("never-set").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_pathless_store_works_in_memory() {
        let mut store = FlagStore::open_from(None).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        assert_eq!(store.get("isLoggedIn"), Some("1"));
        store.remove("isLoggedIn").unwrap();
        assert_eq!(store.get("isLoggedIn"), None);
    }

    #[test]
    fn test_flags_other_than_the_target_survive_a_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.json");

        let mut store = FlagStore::open_at(&path).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("isLoggedIn").unwrap();

        let reopened = FlagStore::open_at(&path).unwrap();
        assert_eq!(reopened.get("theme"), Some("dark"));
    }
}
