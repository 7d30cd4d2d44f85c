//! Persisted collection store
//!
//! A [`CollectionStore`] owns an ordered collection of entities, keeps it
//! mirrored to one slot of a [`BlobStore`], and hands out freshly sorted
//! views. The fund catalog and the transaction ledger are both built on it.
//!
//! Storage problems never reach callers:
//! - On open, an empty, unreadable or corrupt slot falls back to a seed
//!   collection. Which fallback was taken is kept in [`LoadOutcome`].
//! - On mutation, a failed write is logged and reported in the returned
//!   [`PersistOutcome`]. The in-memory change stands either way.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{BlobStore, StorageError};

/// An entity that can live in a [`CollectionStore`]
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Primary key type
    type Key: PartialEq + fmt::Display;

    /// Returns the primary key
    fn key(&self) -> &Self::Key;

    /// Display order for `list()`
    fn listing_order(a: &Self, b: &Self) -> Ordering;
}

/// Why a store started from its seed collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The slot has never been written, or holds an empty blob
    EmptySlot,
    /// No storage medium exists in this context
    Unavailable,
    /// The medium failed while reading
    Unreadable(StorageError),
    /// The slot holds something that is not a collection of entities
    Corrupt(String),
}

/// How a store obtained its initial collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Restored from the storage slot
    Loaded { count: usize },
    /// Started from the seed collection
    Fallback(FallbackReason),
}

impl LoadOutcome {
    /// Returns true if the seed collection was used
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback(_))
    }
}

/// Result of writing the collection back to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    Failed(StorageError),
}

impl PersistOutcome {
    /// Returns true if the write reached storage
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistOutcome::Saved)
    }
}

/// Ordered, persisted collection of entities keyed by `E::Key`
pub struct CollectionStore<E: Entity> {
    slot: String,
    storage: Arc<dyn BlobStore>,
    items: Vec<E>,
    load_outcome: LoadOutcome,
}

impl<E: Entity> CollectionStore<E> {
    /// Opens a store on a storage slot
    ///
    /// # Arguments
    ///
    /// * `storage` - The blob store to read from and write to
    /// * `slot` - Name of the slot holding the collection
    /// * `seed` - Collection to start from if the slot cannot be used
    pub fn open(storage: Arc<dyn BlobStore>, slot: impl Into<String>, seed: Vec<E>) -> Self {
        let slot = slot.into();
        let (items, load_outcome) = match Self::read_slot(storage.as_ref(), &slot) {
            Ok(items) => {
                let count = items.len();
                debug!(slot = %slot, count, "Loaded collection from storage");
                (items, LoadOutcome::Loaded { count })
            }
            Err(reason) => {
                match &reason {
                    FallbackReason::EmptySlot => {
                        debug!(slot = %slot, "Slot empty, using seed collection")
                    }
                    other => {
                        warn!(slot = %slot, reason = ?other, "Slot unusable, using seed collection")
                    }
                }
                (seed, LoadOutcome::Fallback(reason))
            }
        };

        Self {
            slot,
            storage,
            items,
            load_outcome,
        }
    }

    fn read_slot(storage: &dyn BlobStore, slot: &str) -> Result<Vec<E>, FallbackReason> {
        let raw = match storage.get(slot) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return Err(FallbackReason::EmptySlot),
            Err(StorageError::Unavailable) => return Err(FallbackReason::Unavailable),
            Err(e) => return Err(FallbackReason::Unreadable(e)),
        };
        serde_json::from_str(&raw).map_err(|e| FallbackReason::Corrupt(e.to_string()))
    }

    /// Name of the storage slot
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// How the initial collection was obtained
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Backing collection in storage order
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a freshly sorted copy of the collection
    pub fn list(&self) -> Vec<E> {
        let mut listed = self.items.clone();
        listed.sort_by(E::listing_order);
        listed
    }

    /// Finds an entity by key
    pub fn find<Q>(&self, key: &Q) -> Option<&E>
    where
        E::Key: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items
            .iter()
            .find(|e| <E::Key as Borrow<Q>>::borrow(e.key()) == key)
    }

    /// Replaces the entity with the same key, or appends it
    pub fn upsert(&mut self, entity: E) -> PersistOutcome {
        match self.items.iter().position(|e| e.key() == entity.key()) {
            Some(index) => {
                debug!(slot = %self.slot, key = %entity.key(), "Replacing entity");
                self.items[index] = entity;
            }
            None => {
                debug!(slot = %self.slot, key = %entity.key(), "Appending entity");
                self.items.push(entity);
            }
        }
        self.persist()
    }

    /// Removes the entity with the given key, if present
    pub fn delete<Q>(&mut self, key: &Q) -> PersistOutcome
    where
        E::Key: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let before = self.items.len();
        self.items
            .retain(|e| <E::Key as Borrow<Q>>::borrow(e.key()) != key);
        debug!(slot = %self.slot, removed = before - self.items.len(), "Deleted entity");
        self.persist()
    }

    /// Writes the whole collection to its slot
    pub fn persist(&self) -> PersistOutcome {
        let result = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::Serialization(e.to_string()))
            .and_then(|raw| self.storage.set(&self.slot, &raw));

        match result {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Failed to persist collection");
                PersistOutcome::Failed(e)
            }
        }
    }
}

impl<E: Entity + fmt::Debug> fmt::Debug for CollectionStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStore")
            .field("slot", &self.slot)
            .field("items", &self.items)
            .field("load_outcome", &self.load_outcome)
            .finish()
    }
}
