//! Fund domain errors

use thiserror::Error;

use core_kernel::TransactionId;

use crate::transaction::TransactionType;

/// Errors that can occur in the fund domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    FundNotFound(String),

    #[error("{} is required for {}", .0.driving_quantity(), .0)]
    MissingQuantity(TransactionType),

    #[error("{} must be greater than zero for {}", .0.driving_quantity(), .0)]
    NonPositiveQuantity(TransactionType),

    #[error("{} is too large to price for {}", .0.driving_quantity(), .0)]
    QuantityTooLarge(TransactionType),

    #[error("Invalid fund: {0}")]
    InvalidFund(String),

    #[error("Fund code cannot change: expected {expected}, got {actual}")]
    FundCodeMismatch { expected: String, actual: String },

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}

impl FundError {
    /// Creates an InvalidFund error
    pub fn invalid(reason: impl Into<String>) -> Self {
        FundError::InvalidFund(reason.into())
    }

    /// Returns true if a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FundError::FundNotFound(_) | FundError::TransactionNotFound(_)
        )
    }
}
