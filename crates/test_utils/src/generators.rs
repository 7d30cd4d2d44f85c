//! Property-Based Test Generators
//!
//! Proptest strategies that only produce funds and requests the catalog
//! would accept.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_fund::{Fund, TransactionRequest, TransactionType};

/// NAV between 0.0001 and 999.9999
pub fn nav_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Fee percentage between 0% and 100%
pub fn fee_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Positive amount or unit count with up to four decimal places
pub fn positive_quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..=4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Inception date between 2000 and roughly 2027
pub fn ipo_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..10_000i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .map(|base| base + Duration::days(days))
            .unwrap()
    })
}

/// Timestamp within 2024
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..366 * 24 * 60).prop_map(|minutes| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    })
}

/// Valid fund with an uppercase code
pub fn fund_strategy() -> impl Strategy<Value = Fund> {
    (
        "[A-Z]{2,8}",
        nav_strategy(),
        prop::sample::select(domain_fund::AIMC_CATEGORIES.to_vec()),
        ipo_date_strategy(),
        fee_strategy(),
        fee_strategy(),
    )
        .prop_map(|(code, nav, category, ipo, front, back)| {
            Fund::new(code, nav, category, ipo).with_fees(front, back)
        })
}

pub fn transaction_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Buy), Just(TransactionType::Sell)]
}

/// Request against `fund_code` with its driving quantity set
pub fn request_strategy(fund_code: String) -> impl Strategy<Value = TransactionRequest> {
    (transaction_type_strategy(), positive_quantity_strategy()).prop_map(
        move |(transaction_type, quantity)| match transaction_type {
            TransactionType::Buy => TransactionRequest::buy(fund_code.clone(), quantity),
            TransactionType::Sell => TransactionRequest::sell(fund_code.clone(), quantity),
        },
    )
}
