//! Transaction DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_fund::{Transaction, TransactionCriteria, TransactionRequest, TransactionType, Valuation};

use super::{non_blank, parse_date};
use crate::error::ApiError;

/// Ledger search parameters
#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    pub fund_code: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TransactionQuery {
    /// Converts the raw query into search criteria
    pub fn into_criteria(self) -> Result<TransactionCriteria, ApiError> {
        let transaction_type = non_blank(self.transaction_type)
            .map(|t| t.parse::<TransactionType>())
            .transpose()
            .map_err(ApiError::BadRequest)?;

        Ok(TransactionCriteria {
            fund_code: non_blank(self.fund_code),
            transaction_type,
            start_date: parse_date("start_date", self.start_date.as_deref())?,
            end_date: parse_date("end_date", self.end_date.as_deref())?,
        })
    }
}

/// A buy or sell as submitted by a client
#[derive(Debug, Deserialize)]
pub struct TransactionBody {
    pub fund_code: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Option<Decimal>,
    pub units: Option<Decimal>,
}

impl From<TransactionBody> for TransactionRequest {
    fn from(body: TransactionBody) -> Self {
        TransactionRequest {
            fund_code: body.fund_code.trim().to_string(),
            transaction_type: body.transaction_type,
            amount: body.amount,
            units: body.units,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub fund_code: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub units: Decimal,
    pub nav: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.into(),
            fund_code: tx.fund_code,
            transaction_type: tx.transaction_type,
            amount: tx.amount,
            units: tx.units,
            nav: tx.nav,
            fee: tx.fee,
            net: tx.net,
            timestamp: tx.timestamp,
        }
    }
}

/// Live figures for an unsaved transaction form
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub nav: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
    pub units: Decimal,
    pub amount: Decimal,
}

impl From<Valuation> for PreviewResponse {
    fn from(v: Valuation) -> Self {
        Self {
            nav: v.nav,
            fee: v.fee,
            net: v.net,
            units: v.units,
            amount: v.amount,
        }
    }
}
