//! Directory-backed blob store.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go through
//! [`crate::fs::write_atomic`] so an interrupted write never leaves a
//! half-written record behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, VoteError};
use crate::storage::traits::{validate_key, BlobStore};

const RECORD_EXTENSION: &str = "json";

/// Blob store persisting one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns `VoteError::Storage` if the directory cannot be created or
    /// `dir` exists but is not a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(VoteError::Storage(format!(
                "Store path is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(&dir).map_err(|e| {
            VoteError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// Root directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn record_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, RECORD_EXTENSION)))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(VoteError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key)?;
        crate::fs::write_atomic(&path, value.as_bytes()).map_err(|e| {
            VoteError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(VoteError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");

        let store = FileStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(store.dir(), root.as_path());
    }

    #[test]
    fn test_open_rejects_file_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        assert!(matches!(FileStore::open(&file), Err(VoteError::Storage(_))));
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("user-votes").unwrap(), None);
        store.set("user-votes", "[]").unwrap();
        assert_eq!(store.get("user-votes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("user-votes.json").exists());

        store.remove("user-votes").unwrap();
        assert_eq!(store.get("user-votes").unwrap(), None);
        store.remove("user-votes").unwrap();
    }

    #[test]
    fn test_rejects_traversal_key() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(VoteError::InvalidInput(_))
        ));
    }
}
