//! Storage setup errors
//!
//! Errors raised while wiring an adapter up. Once a store is open, failures
//! travel as [`core_kernel::StorageError`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening a storage adapter
#[derive(Debug, Error)]
pub enum InfraError {
    /// The data directory could not be created or is not a directory
    #[error("Storage directory {path:?} unusable: {reason}")]
    DirectoryUnusable { path: PathBuf, reason: String },

    /// The storage configuration is incomplete or contradictory
    #[error("Invalid storage configuration: {0}")]
    InvalidConfiguration(String),
}

impl InfraError {
    /// Creates a DirectoryUnusable error
    pub fn directory(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        InfraError::DirectoryUnusable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Checks if this error comes from the configuration rather than the medium
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, InfraError::InvalidConfiguration(_))
    }
}
