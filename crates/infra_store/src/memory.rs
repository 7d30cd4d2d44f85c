//! In-memory blob store

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use core_kernel::{BlobStore, StorageError};

/// Process-local slots, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-filled slots
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: RwLock::new(
                slots
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StorageError::io(slot, "lock poisoned"))?;
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::io(slot, "lock poisoned"))?;
        debug!(slot = %slot, bytes = value.len(), "Memory slot write");
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_slot() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("mfms_funds"), Ok(None));
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryBlobStore::new();
        store.set("mfms_funds", "[]").unwrap();
        assert_eq!(store.get("mfms_funds"), Ok(Some("[]".to_string())));
    }

    #[test]
    fn test_with_slots() {
        let store = MemoryBlobStore::with_slots([("a", "1")]);
        assert_eq!(store.get("a"), Ok(Some("1".to_string())));
    }
}
