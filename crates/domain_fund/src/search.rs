//! Search criteria for the fund catalog and the ledger
//!
//! Criteria are pure filters applied to an already sorted listing. A blank
//! or absent field matches everything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fund::Fund;
use crate::transaction::{Transaction, TransactionType};

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim).filter(|n| !n.is_empty()) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}

/// Fund catalog search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundCriteria {
    /// Substring of the fund code
    pub fund_code: Option<String>,
    /// Substring of the AIMC category
    pub aimc_category: Option<String>,
    /// Earliest inception date (inclusive)
    pub ipo_from: Option<NaiveDate>,
    /// Latest inception date (inclusive)
    pub ipo_to: Option<NaiveDate>,
}

impl FundCriteria {
    /// Returns true if the fund satisfies every criterion
    pub fn matches(&self, fund: &Fund) -> bool {
        contains_ignore_case(&fund.fund_code, self.fund_code.as_deref())
            && contains_ignore_case(&fund.aimc_category, self.aimc_category.as_deref())
            && within(fund.ipo_date, self.ipo_from, self.ipo_to)
    }

    /// Keeps the matching funds, preserving order
    pub fn apply(&self, funds: Vec<Fund>) -> Vec<Fund> {
        funds.into_iter().filter(|f| self.matches(f)).collect()
    }
}

/// Ledger search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCriteria {
    /// Substring of the fund code
    pub fund_code: Option<String>,
    /// Exact direction
    pub transaction_type: Option<TransactionType>,
    /// Earliest UTC calendar date of the timestamp (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest UTC calendar date of the timestamp (inclusive, whole day)
    pub end_date: Option<NaiveDate>,
}

impl TransactionCriteria {
    /// Returns true if the transaction satisfies every criterion
    pub fn matches(&self, transaction: &Transaction) -> bool {
        contains_ignore_case(&transaction.fund_code, self.fund_code.as_deref())
            && self
                .transaction_type
                .map_or(true, |t| t == transaction.transaction_type)
            && within(
                transaction.timestamp.date_naive(),
                self.start_date,
                self.end_date,
            )
    }

    /// Keeps the matching transactions, preserving order
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        transactions.into_iter().filter(|t| self.matches(t)).collect()
    }
}
