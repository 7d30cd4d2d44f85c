//! Core Kernel - Foundational types shared by the bookkeeping crates
//!
//! This crate provides the building blocks every other crate depends on:
//! - Strongly-typed identifiers
//! - The key-value storage port that persistence adapters implement

pub mod identifiers;
pub mod ports;

pub use identifiers::{BlankId, TransactionId};
pub use ports::{BlobStore, StorageError};
