//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fund bookkeeping test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `storage`: Blob store doubles that record or fail writes
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod storage;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use storage::*;
