//! Fund DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_fund::{Fund, FundCriteria};

use super::{non_blank, parse_date};
use crate::error::ApiError;

/// Fund catalog search parameters
#[derive(Debug, Default, Deserialize)]
pub struct FundQuery {
    pub fund_code: Option<String>,
    pub aimc_category: Option<String>,
    pub ipo_from: Option<String>,
    pub ipo_to: Option<String>,
}

impl FundQuery {
    /// Converts the raw query into search criteria
    pub fn into_criteria(self) -> Result<FundCriteria, ApiError> {
        Ok(FundCriteria {
            ipo_from: parse_date("ipo_from", self.ipo_from.as_deref())?,
            ipo_to: parse_date("ipo_to", self.ipo_to.as_deref())?,
            fund_code: non_blank(self.fund_code),
            aimc_category: non_blank(self.aimc_category),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct FundRequest {
    pub fund_code: String,
    pub nav: Decimal,
    pub aimc_category: String,
    pub ipo_date: NaiveDate,
    #[serde(default)]
    pub front_end_fee: Decimal,
    #[serde(default)]
    pub back_end_fee: Decimal,
}

impl From<FundRequest> for Fund {
    fn from(request: FundRequest) -> Self {
        Fund::new(
            request.fund_code.trim(),
            request.nav,
            request.aimc_category,
            request.ipo_date,
        )
        .with_fees(request.front_end_fee, request.back_end_fee)
    }
}

#[derive(Debug, Serialize)]
pub struct FundResponse {
    pub fund_code: String,
    pub nav: Decimal,
    pub aimc_category: String,
    pub ipo_date: NaiveDate,
    pub front_end_fee: Decimal,
    pub back_end_fee: Decimal,
}

impl From<Fund> for FundResponse {
    fn from(fund: Fund) -> Self {
        Self {
            fund_code: fund.fund_code,
            nav: fund.nav,
            aimc_category: fund.aimc_category,
            ipo_date: fund.ipo_date,
            front_end_fee: fund.front_end_fee,
            back_end_fee: fund.back_end_fee,
        }
    }
}
