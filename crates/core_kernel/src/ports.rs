//! Storage Port
//!
//! The stores in `domain_fund` never touch a storage medium directly. They
//! hold a [`BlobStore`]: a named-slot key-value store that keeps one opaque
//! text blob per slot. Adapters live in `infra_store`.
//!
//! ```text
//!   FundBook / Ledger ──► BlobStore ──► memory | file-per-slot | unavailable
//! ```
//!
//! The port is synchronous. Every store operation completes or fails on the
//! calling thread, and a failing medium is reported through [`StorageError`]
//! so callers can decide whether to absorb it.

use thiserror::Error;

/// Error type for storage port operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage medium exists in this execution context
    #[error("Storage unavailable")]
    Unavailable,

    /// The slot exists but its contents cannot be decoded
    #[error("Corrupt slot '{slot}': {reason}")]
    Corrupt {
        slot: String,
        reason: String,
    },

    /// Reading or writing the medium failed
    #[error("I/O error on slot '{slot}': {reason}")]
    Io {
        slot: String,
        reason: String,
    },

    /// A value could not be encoded for storage
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Creates a Corrupt error
    pub fn corrupt(slot: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Corrupt {
            slot: slot.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an Io error
    pub fn io(slot: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Io {
            slot: slot.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if there is no medium at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable)
    }
}

/// A synchronous key-value blob store scoped to one origin or profile
///
/// Implementations must be thread-safe so a single instance can be shared
/// between the fund and transaction stores.
pub trait BlobStore: Send + Sync + 'static {
    /// Reads the raw contents of a slot
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the slot has never been written
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the contents of a slot
    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError>;
}
