//! Fund Bookkeeping Domain
//!
//! This crate implements a small mutual fund bookkeeping engine: a catalog of
//! funds, buy/sell transactions priced against those funds, and collection
//! stores that persist both through a [`core_kernel::BlobStore`].
//!
//! # Key Concepts
//!
//! - **Fund**: A catalog entry with a hand-edited NAV and fee schedule
//! - **NAV**: Net Asset Value per unit, the price basis for conversions
//! - **Valuation**: The priced figures (fee, net, units) of a buy or sell
//! - **Ledger**: The persisted, time-ordered collection of transactions
//!
//! # Precision
//!
//! Money figures are rounded to 2 decimal places and units to 4. For a Buy
//! of 5,000.00 at NAV 10.25 with a 1% front-end fee:
//! - fee = round2(5000 × 1 / 100) = 50.00
//! - net = round2(5000 − 50) = 4,950.00
//! - units = round4(4950 ÷ 10.25) = round4(482.926829…) = 482.9268

pub mod error;
pub mod fund;
pub mod fund_book;
pub mod ledger;
pub mod search;
pub mod seed;
pub mod store;
pub mod transaction;
pub mod valuation;

pub use error::FundError;
pub use fund::{Fund, AIMC_CATEGORIES};
pub use fund_book::{FundBook, FUNDS_SLOT};
pub use ledger::{Ledger, TRANSACTIONS_SLOT};
pub use search::{FundCriteria, TransactionCriteria};
pub use store::{CollectionStore, Entity, FallbackReason, LoadOutcome, PersistOutcome};
pub use transaction::{Transaction, TransactionRequest, TransactionType};
pub use valuation::{preview, price, price_request, Valuation};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Money precision (2 decimal places)
pub const MONEY_PRECISION: u32 = 2;

/// Unit precision (4 decimal places)
pub const UNIT_PRECISION: u32 = 4;

/// Rounds a monetary value to 2 decimal places, midpoints away from zero
///
/// # Example
///
/// ```rust
/// use domain_fund::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(5.125)), dec!(5.13));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a unit quantity to 4 decimal places, midpoints away from zero
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(UNIT_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage rate to a value
///
/// # Arguments
///
/// * `value` - The base value
/// * `rate` - Percentage in the range 0-100
///
/// Returns `None` if the product does not fit in a `Decimal`.
pub fn percent_of(value: Decimal, rate: Decimal) -> Option<Decimal> {
    value.checked_mul(rate)?.checked_div(dec!(100))
}

/// Converts an amount to units at a NAV, unrounded
///
/// A zero NAV yields zero units. Returns `None` if the quotient does not
/// fit in a `Decimal`.
pub fn units_for(amount: Decimal, nav: Decimal) -> Option<Decimal> {
    if nav.is_zero() {
        return Some(Decimal::ZERO);
    }
    amount.checked_div(nav)
}
