//! Storage configuration and adapter selection

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use core_kernel::BlobStore;

use crate::error::InfraError;
use crate::file::FileBlobStore;
use crate::memory::MemoryBlobStore;
use crate::unavailable::UnavailableBlobStore;

/// Which adapter backs the stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Keep slots in process memory
    #[default]
    Memory,
    /// Keep slots as files in a directory
    File,
    /// Run without any storage medium
    Unavailable,
}

/// Configuration options for the storage adapter
///
/// # Example
///
/// ```rust
/// use infra_store::{StorageBackend, StorageConfig};
///
/// let config = StorageConfig::file("/var/lib/mfms");
/// assert_eq!(config.backend, StorageBackend::File);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Adapter to use
    pub backend: StorageBackend,
    /// Data directory, required by the file backend
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// In-memory storage
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            dir: None,
        }
    }

    /// File storage rooted at `dir`
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            dir: Some(dir.into()),
        }
    }

    /// No storage medium
    pub fn unavailable() -> Self {
        Self {
            backend: StorageBackend::Unavailable,
            dir: None,
        }
    }
}

/// Creates the blob store described by the configuration
///
/// # Errors
///
/// - `InfraError::InvalidConfiguration` if the file backend has no directory
/// - `InfraError::DirectoryUnusable` if the directory cannot be used
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn BlobStore>, InfraError> {
    info!(backend = ?config.backend, "Opening storage");

    let store: Arc<dyn BlobStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryBlobStore::new()),
        StorageBackend::Unavailable => Arc::new(UnavailableBlobStore),
        StorageBackend::File => {
            let dir = config.dir.as_ref().ok_or_else(|| {
                InfraError::InvalidConfiguration("file backend requires a directory".into())
            })?;
            Arc::new(FileBlobStore::open(dir)?)
        }
    };

    Ok(store)
}
