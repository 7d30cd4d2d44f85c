//! Buy and sell transactions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::TransactionId;

use crate::error::FundError;
use crate::valuation::Valuation;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Purchase of units for an amount of money
    Buy,
    /// Redemption of units for proceeds
    Sell,
}

impl TransactionType {
    /// Name of the user-supplied quantity that drives the calculation
    pub fn driving_quantity(&self) -> &'static str {
        match self {
            TransactionType::Buy => "Amount",
            TransactionType::Sell => "Units",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "Buy"),
            TransactionType::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// A priced transaction record
///
/// `nav`, `fee` and `net` are always derived. For a Buy, `amount` is the
/// user's input and `units` is derived; for a Sell it is the other way
/// round and `amount` holds the gross (pre-fee) proceeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, fixed at creation
    pub id: TransactionId,
    /// Code of the fund this transaction was priced against
    pub fund_code: String,
    /// Buy or Sell
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Money moved (Buy input, or Sell gross proceeds)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Units moved (Buy derived, or Sell input)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub units: Decimal,
    /// Fund NAV captured when priced
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub nav: Decimal,
    /// Fee charged
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee: Decimal,
    /// Net cash amount after fee
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net: Decimal,
    /// Creation instant, never changed by edits
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction from a valuation
    pub fn new(
        fund_code: impl Into<String>,
        transaction_type: TransactionType,
        valuation: Valuation,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            fund_code: fund_code.into(),
            transaction_type,
            amount: valuation.amount,
            units: valuation.units,
            nav: valuation.nav,
            fee: valuation.fee,
            net: valuation.net,
            timestamp,
        }
    }

    /// Re-prices this transaction in place, keeping id and timestamp
    pub fn reprice(
        &mut self,
        fund_code: impl Into<String>,
        transaction_type: TransactionType,
        valuation: Valuation,
    ) {
        self.fund_code = fund_code.into();
        self.transaction_type = transaction_type;
        self.amount = valuation.amount;
        self.units = valuation.units;
        self.nav = valuation.nav;
        self.fee = valuation.fee;
        self.net = valuation.net;
    }
}

/// What the user asked for: a fund, a direction, and one quantity
///
/// Only the quantity matching the direction is read: `amount` for a Buy,
/// `units` for a Sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub fund_code: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub units: Option<Decimal>,
}

impl TransactionRequest {
    /// Creates a Buy request for an amount of money
    pub fn buy(fund_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            fund_code: fund_code.into(),
            transaction_type: TransactionType::Buy,
            amount: Some(amount),
            units: None,
        }
    }

    /// Creates a Sell request for a number of units
    pub fn sell(fund_code: impl Into<String>, units: Decimal) -> Self {
        Self {
            fund_code: fund_code.into(),
            transaction_type: TransactionType::Sell,
            amount: None,
            units: Some(units),
        }
    }

    /// Returns the quantity that drives the calculation
    ///
    /// # Errors
    ///
    /// Returns `FundError::MissingQuantity` if it was not supplied
    pub fn quantity(&self) -> Result<Decimal, FundError> {
        let quantity = match self.transaction_type {
            TransactionType::Buy => self.amount,
            TransactionType::Sell => self.units,
        };
        quantity.ok_or(FundError::MissingQuantity(self.transaction_type))
    }
}
