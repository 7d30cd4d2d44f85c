//! Pre-built Test Fixtures
//!
//! Ready-to-use funds, dates and storage slots that match the seed catalog.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use domain_fund::Fund;

/// Fixture for fund test data
pub struct FundFixtures;

impl FundFixtures {
    /// Money market fund with no fees
    pub fn k_cash() -> Fund {
        Fund::new(
            "K-CASH",
            dec!(15.1234),
            "Money Market",
            TemporalFixtures::date(2024, 5, 20),
        )
    }

    /// Equity fund with a 1% front-end and 0.5% back-end fee
    pub fn scb_banking() -> Fund {
        Fund::new(
            "SCBBANKING",
            dec!(10.25),
            "Equity Large Cap",
            TemporalFixtures::date(2021, 1, 15),
        )
        .with_fees(dec!(1.0), dec!(0.5))
    }

    /// Both seed funds, newest inception first
    pub fn catalog() -> Vec<Fund> {
        vec![Self::k_cash(), Self::scb_banking()]
    }

    /// Fund catalog slot as a browser client writes it
    pub fn catalog_json() -> String {
        r#"[
            {"fundCode":"K-CASH","nav":15.1234,"aimcCategory":"Money Market","ipoDate":"2024-05-20","frontEndFee":0,"backEndFee":0},
            {"fundCode":"SCBBANKING","nav":10.25,"aimcCategory":"Equity Large Cap","ipoDate":"2021-01-15","frontEndFee":1.0,"backEndFee":0.5}
        ]"#
        .to_string()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Calendar date; panics on an impossible date
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Mid-morning trade time (Mar 1, 2024 09:30 UTC)
    pub fn trade_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    /// Last second of the trade day
    pub fn end_of_trade_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap()
    }

    /// First second of the following day
    pub fn next_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()
    }
}
