//! Transaction valuation
//!
//! Turns a fund and a transaction intent into priced figures. Everything here
//! is pure: the same fund and quantity always produce the same valuation.
//!
//! Buy:
//! - fee = amount × front-end fee %
//! - net = amount − fee
//! - units = net ÷ NAV, rounded to 4 dp
//!
//! Sell:
//! - gross = units × NAV (reported as `amount`)
//! - fee = gross × back-end fee %
//! - net = gross − fee
//!
//! `fee` and `net` are rounded to 2 dp independently, from the unrounded
//! intermediates, so `fee + net` may differ from the amount by a cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FundError;
use crate::fund::Fund;
use crate::transaction::{TransactionRequest, TransactionType};
use crate::{percent_of, round_money, round_units, units_for};

/// Priced figures for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    /// Buy: the amount paid. Sell: gross proceeds before fee.
    pub amount: Decimal,
    /// Buy: units bought. Sell: units redeemed.
    pub units: Decimal,
    /// NAV the figures were priced at
    pub nav: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
}

impl Valuation {
    /// A valuation with every figure zero
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            units: Decimal::ZERO,
            nav: Decimal::ZERO,
            fee: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Returns the user-supplied quantity for the given direction
    pub fn driving_quantity(&self, transaction_type: TransactionType) -> Decimal {
        match transaction_type {
            TransactionType::Buy => self.amount,
            TransactionType::Sell => self.units,
        }
    }
}

/// Unrounded figures shared by `price` and `preview`
///
/// Returns `None` if any intermediate leaves the `Decimal` range.
fn raw_figures(
    fund: &Fund,
    transaction_type: TransactionType,
    quantity: Decimal,
) -> Option<Valuation> {
    let nav = fund.nav;
    let valuation = match transaction_type {
        TransactionType::Buy => {
            let fee = percent_of(quantity, fund.front_end_fee)?;
            let net = quantity.checked_sub(fee)?;
            Valuation {
                amount: quantity,
                units: units_for(net, nav)?,
                nav,
                fee,
                net,
            }
        }
        TransactionType::Sell => {
            let gross = quantity.checked_mul(nav)?;
            let fee = percent_of(gross, fund.back_end_fee)?;
            Valuation {
                amount: gross,
                units: quantity,
                nav,
                fee,
                net: gross.checked_sub(fee)?,
            }
        }
    };
    Some(valuation)
}

/// Prices a transaction against a fund's current NAV
///
/// # Arguments
///
/// * `fund` - The resolved fund
/// * `transaction_type` - Buy or Sell
/// * `quantity` - Amount for a Buy, units for a Sell
///
/// Non-positive quantities are priced as-is; rejecting them is the caller's
/// decision.
///
/// # Errors
///
/// Returns `FundError::QuantityTooLarge` if the figures overflow `Decimal`
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use domain_fund::{price, Fund, TransactionType};
/// use rust_decimal_macros::dec;
///
/// let fund = Fund::new("SCBBANKING", dec!(10.25), "Equity Large Cap",
///     NaiveDate::from_ymd_opt(2021, 1, 15).unwrap())
///     .with_fees(dec!(1.0), dec!(0.5));
///
/// let valuation = price(&fund, TransactionType::Sell, dec!(100)).unwrap();
/// assert_eq!(valuation.amount, dec!(1025));
/// assert_eq!(valuation.fee, dec!(5.13));
/// assert_eq!(valuation.net, dec!(1019.88));
/// ```
pub fn price(
    fund: &Fund,
    transaction_type: TransactionType,
    quantity: Decimal,
) -> Result<Valuation, FundError> {
    let raw = raw_figures(fund, transaction_type, quantity)
        .ok_or(FundError::QuantityTooLarge(transaction_type))?;
    let units = match transaction_type {
        TransactionType::Buy => round_units(raw.units),
        TransactionType::Sell => raw.units,
    };

    Ok(Valuation {
        amount: raw.amount,
        units,
        nav: raw.nav,
        fee: round_money(raw.fee),
        net: round_money(raw.net),
    })
}

/// Prices a request, reading the quantity that matches its direction
///
/// # Errors
///
/// - `FundError::MissingQuantity` when the driving quantity is absent
/// - `FundError::QuantityTooLarge` when the figures overflow
pub fn price_request(fund: &Fund, request: &TransactionRequest) -> Result<Valuation, FundError> {
    let quantity = request.quantity()?;
    price(fund, request.transaction_type, quantity)
}

/// Live figures for a transaction form that is still being filled in
///
/// An unknown fund or an out-of-range quantity yields all zeros, and a
/// missing quantity counts as zero. Figures are left unrounded.
pub fn preview(fund: Option<&Fund>, request: &TransactionRequest) -> Valuation {
    let Some(fund) = fund else {
        return Valuation::zero();
    };
    let quantity = request.quantity().unwrap_or(Decimal::ZERO);
    raw_figures(fund, request.transaction_type, quantity).unwrap_or_else(Valuation::zero)
}
