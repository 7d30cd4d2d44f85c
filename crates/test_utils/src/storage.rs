//! Blob store doubles
//!
//! - [`RecordingBlobStore`] wraps a working store and counts writes per slot
//! - [`FailingBlobStore`] reads normally but refuses every write
//! - [`scratch_file_store`] opens a file store in a fresh temporary directory

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use core_kernel::{BlobStore, StorageError};
use infra_store::{FileBlobStore, MemoryBlobStore};

/// In-memory store that records every write
#[derive(Debug, Default)]
pub struct RecordingBlobStore {
    inner: MemoryBlobStore,
    writes: Mutex<HashMap<String, usize>>,
}

impl RecordingBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with pre-populated slots
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: MemoryBlobStore::with_slots(slots),
            writes: Mutex::new(HashMap::new()),
        }
    }

    /// Number of writes to `slot` so far
    pub fn writes(&self, slot: &str) -> usize {
        self.writes
            .lock()
            .map(|w| w.get(slot).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Current contents of `slot`
    pub fn contents(&self, slot: &str) -> Option<String> {
        self.inner.get(slot).ok().flatten()
    }
}

impl BlobStore for RecordingBlobStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut writes) = self.writes.lock() {
            *writes.entry(slot.to_string()).or_insert(0) += 1;
        }
        self.inner.set(slot, value)
    }
}

/// Store whose reads succeed but whose writes always fail
#[derive(Debug, Default)]
pub struct FailingBlobStore {
    inner: MemoryBlobStore,
}

impl FailingBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with pre-populated slots
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: MemoryBlobStore::with_slots(slots),
        }
    }
}

impl BlobStore for FailingBlobStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(slot)
    }

    fn set(&self, slot: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::io(slot, "quota exceeded"))
    }
}

/// File store in a temporary directory; keep the guard alive for the test
pub fn scratch_file_store() -> (tempfile::TempDir, Arc<dyn BlobStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBlobStore::open(dir.path()).unwrap();
    (dir, Arc::new(store))
}
