//! A blob store for contexts that have no storage medium

use core_kernel::{BlobStore, StorageError};

/// Rejects every read and write with `StorageError::Unavailable`
///
/// Stores opened on it start from their seed and keep working in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBlobStore;

impl BlobStore for UnavailableBlobStore {
    fn get(&self, _slot: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _slot: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
