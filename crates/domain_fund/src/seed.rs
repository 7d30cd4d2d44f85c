//! Seed collections used when nothing has been persisted yet

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::fund::Fund;
use crate::transaction::Transaction;

/// The starter fund catalog
pub fn seed_funds() -> Vec<Fund> {
    let mut funds = Vec::with_capacity(2);
    if let Some(ipo_date) = NaiveDate::from_ymd_opt(2024, 5, 20) {
        funds.push(Fund::new("K-CASH", dec!(15.1234), "Money Market", ipo_date));
    }
    if let Some(ipo_date) = NaiveDate::from_ymd_opt(2021, 1, 15) {
        funds.push(
            Fund::new("SCBBANKING", dec!(10.25), "Equity Large Cap", ipo_date)
                .with_fees(dec!(1.0), dec!(0.5)),
        );
    }
    funds
}

/// The starter ledger (empty)
pub fn seed_transactions() -> Vec<Transaction> {
    Vec::new()
}
