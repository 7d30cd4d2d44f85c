//! File-backed blob store
//!
//! Each slot is a `<slot>.json` file inside one data directory. Writes go to
//! a temporary sibling first and are renamed into place, so a crash mid-write
//! leaves the previous contents readable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use core_kernel::{BlobStore, StorageError};

use crate::error::InfraError;

/// Slots stored as JSON files in a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Opens a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `InfraError::DirectoryUnusable` if the directory cannot be
    /// created or the path is not a directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, InfraError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| InfraError::directory(&dir, e))?;
        if !dir.is_dir() {
            return Err(InfraError::directory(&dir, "not a directory"));
        }
        info!(dir = %dir.display(), "Opened file storage");
        Ok(Self { dir })
    }

    /// The data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: &str) -> Result<PathBuf, StorageError> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::io(slot, "invalid slot name"));
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(slot)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StorageError::corrupt(slot, e)),
            Err(e) => Err(StorageError::io(slot, e)),
        }
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(slot)?;
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, value).map_err(|e| StorageError::io(slot, e))?;
        fs::rename(&staging, &path).map_err(|e| StorageError::io(slot, e))?;

        debug!(slot = %slot, bytes = value.len(), path = %path.display(), "File slot write");
        Ok(())
    }
}
