//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_fund::{Fund, TransactionRequest, TransactionType};

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test funds
pub struct TestFundBuilder {
    fund_code: String,
    nav: Decimal,
    aimc_category: String,
    ipo_date: NaiveDate,
    front_end_fee: Decimal,
    back_end_fee: Decimal,
}

impl Default for TestFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFundBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            fund_code: "TEST-FUND".to_string(),
            nav: dec!(10.0000),
            aimc_category: "Mixed Fund".to_string(),
            ipo_date: TemporalFixtures::date(2022, 6, 1),
            front_end_fee: Decimal::ZERO,
            back_end_fee: Decimal::ZERO,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.fund_code = code.into();
        self
    }

    pub fn with_nav(mut self, nav: Decimal) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.aimc_category = category.into();
        self
    }

    pub fn with_ipo_date(mut self, date: NaiveDate) -> Self {
        self.ipo_date = date;
        self
    }

    /// Sets both fee percentages
    pub fn with_fees(mut self, front_end: Decimal, back_end: Decimal) -> Self {
        self.front_end_fee = front_end;
        self.back_end_fee = back_end;
        self
    }

    pub fn build(self) -> Fund {
        Fund::new(self.fund_code, self.nav, self.aimc_category, self.ipo_date)
            .with_fees(self.front_end_fee, self.back_end_fee)
    }
}

/// Builder for transaction requests
pub struct TransactionRequestBuilder {
    fund_code: String,
    transaction_type: TransactionType,
    amount: Option<Decimal>,
    units: Option<Decimal>,
}

impl TransactionRequestBuilder {
    /// Starts a Buy with no amount
    pub fn buy(fund_code: impl Into<String>) -> Self {
        Self {
            fund_code: fund_code.into(),
            transaction_type: TransactionType::Buy,
            amount: None,
            units: None,
        }
    }

    /// Starts a Sell with no units
    pub fn sell(fund_code: impl Into<String>) -> Self {
        Self {
            fund_code: fund_code.into(),
            transaction_type: TransactionType::Sell,
            amount: None,
            units: None,
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn units(mut self, units: Decimal) -> Self {
        self.units = Some(units);
        self
    }

    pub fn build(self) -> TransactionRequest {
        TransactionRequest {
            fund_code: self.fund_code,
            transaction_type: self.transaction_type,
            amount: self.amount,
            units: self.units,
        }
    }
}
