//! Fund definition
//!
//! A fund is identified by its code. NAV and fees are edited by hand; there is
//! no market data feed behind them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FundError;

/// Suggested AIMC category labels
///
/// The category itself is free-form; these are the values offered when a
/// fund is created.
pub const AIMC_CATEGORIES: [&str; 5] = [
    "Money Market",
    "Equity Large Cap",
    "Equity Small Cap",
    "Fixed Income",
    "Mixed Fund",
];

/// Smallest NAV accepted for a fund
pub const MIN_NAV: Decimal = dec!(0.0001);

/// A mutual fund in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Fund code (primary key, never changes once created)
    pub fund_code: String,
    /// Net asset value per unit
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub nav: Decimal,
    /// AIMC classification label
    pub aimc_category: String,
    /// Inception date
    pub ipo_date: NaiveDate,
    /// Fee charged on purchase, as a percentage (1.0 = 1%)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub front_end_fee: Decimal,
    /// Fee charged on redemption, as a percentage
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub back_end_fee: Decimal,
}

impl Fund {
    /// Creates a new fund with no fees
    ///
    /// # Arguments
    ///
    /// * `fund_code` - Unique fund code
    /// * `nav` - Net asset value per unit
    /// * `aimc_category` - Classification label
    /// * `ipo_date` - Inception date
    pub fn new(
        fund_code: impl Into<String>,
        nav: Decimal,
        aimc_category: impl Into<String>,
        ipo_date: NaiveDate,
    ) -> Self {
        Self {
            fund_code: fund_code.into(),
            nav,
            aimc_category: aimc_category.into(),
            ipo_date,
            front_end_fee: Decimal::ZERO,
            back_end_fee: Decimal::ZERO,
        }
    }

    /// Sets the front-end and back-end fee percentages
    pub fn with_fees(mut self, front_end_fee: Decimal, back_end_fee: Decimal) -> Self {
        self.front_end_fee = front_end_fee;
        self.back_end_fee = back_end_fee;
        self
    }

    /// Sets the NAV
    pub fn with_nav(mut self, nav: Decimal) -> Self {
        self.nav = nav;
        self
    }

    /// Checks the catalog invariants
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidFund` naming the first offending field
    pub fn validate(&self) -> Result<(), FundError> {
        if self.fund_code.trim().is_empty() {
            return Err(FundError::invalid("fund code is required"));
        }
        if self.nav < MIN_NAV {
            return Err(FundError::invalid(format!(
                "NAV must be at least {}, got {}",
                MIN_NAV, self.nav
            )));
        }
        if self.aimc_category.trim().is_empty() {
            return Err(FundError::invalid("AIMC category is required"));
        }
        for (name, rate) in [
            ("front-end fee", self.front_end_fee),
            ("back-end fee", self.back_end_fee),
        ] {
            if rate < Decimal::ZERO || rate > dec!(100) {
                return Err(FundError::invalid(format!(
                    "{} must be between 0 and 100, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}
