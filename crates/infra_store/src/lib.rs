//! Storage Infrastructure Layer
//!
//! This crate provides the adapters behind [`core_kernel::BlobStore`], the
//! named-slot blob store the fund catalog and ledger persist into.
//!
//! # Adapters
//!
//! - [`MemoryBlobStore`]: process-local slots, lost on exit
//! - [`FileBlobStore`]: one `<slot>.json` file per slot in a directory
//! - [`UnavailableBlobStore`]: a context with no storage medium at all
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{open_store, StorageConfig};
//!
//! let storage = open_store(&StorageConfig::file("./data"))?;
//! let funds = FundBook::open(storage.clone());
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod unavailable;

pub use config::{open_store, StorageBackend, StorageConfig};
pub use error::InfraError;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use unavailable::UnavailableBlobStore;
