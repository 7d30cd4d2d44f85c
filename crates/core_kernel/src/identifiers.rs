//! Identifiers for domain entities
//!
//! A transaction id is an opaque string key. New ids are random UUIDs, but
//! any non-blank string read back from storage is accepted as-is, so records
//! written by older clients with their own id scheme keep their identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when parsing a blank identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier cannot be blank")]
pub struct BlankId;

/// Identifier of a ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = BlankId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BlankId);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> String {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = TransactionId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_parsing_trims() {
        let parsed: TransactionId = "  tx_1700000000_42 ".parse().unwrap();
        assert_eq!(parsed.as_str(), "tx_1700000000_42");
    }

    #[test]
    fn test_blank_is_rejected() {
        assert_eq!("   ".parse::<TransactionId>(), Err(BlankId));
    }
}
