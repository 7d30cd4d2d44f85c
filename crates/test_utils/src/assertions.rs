//! Custom Test Assertions
//!
//! Assertion helpers for listings and valuations with clearer failure
//! messages than plain `assert!`.

use rust_decimal::Decimal;

use domain_fund::{Fund, Transaction, Valuation};

/// Asserts that funds are listed newest inception date first
pub fn assert_funds_newest_first(funds: &[Fund]) {
    for pair in funds.windows(2) {
        assert!(
            pair[0].ipo_date >= pair[1].ipo_date,
            "Funds out of order: {} ({}) listed before {} ({})",
            pair[0].fund_code,
            pair[0].ipo_date,
            pair[1].fund_code,
            pair[1].ipo_date
        );
    }
}

/// Asserts that transactions are listed most recent first
pub fn assert_transactions_newest_first(transactions: &[Transaction]) {
    for pair in transactions.windows(2) {
        assert!(
            pair[0].timestamp >= pair[1].timestamp,
            "Transactions out of order: {} at {} listed before {} at {}",
            pair[0].id,
            pair[0].timestamp,
            pair[1].id,
            pair[1].timestamp
        );
    }
}

/// Asserts fee and net, the two figures every valuation rounds to cents
pub fn assert_fee_and_net(valuation: &Valuation, fee: Decimal, net: Decimal) {
    assert_eq!(
        (valuation.fee, valuation.net),
        (fee, net),
        "Expected fee={} net={}, got fee={} net={}",
        fee,
        net,
        valuation.fee,
        valuation.net
    );
}

/// Asserts that a decimal has at most `places` decimal places
pub fn assert_max_scale(value: Decimal, places: u32) {
    assert!(
        value.normalize().scale() <= places,
        "Expected at most {} decimal places, got {}",
        places,
        value
    );
}
