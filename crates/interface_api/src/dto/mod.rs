//! Request and response bodies

pub mod fund;
pub mod transaction;

use chrono::NaiveDate;

use crate::error::ApiError;

/// Parses an optional `YYYY-MM-DD` query value; blank means absent
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{} must be a YYYY-MM-DD date, got '{}'", field, v))),
        None => Ok(None),
    }
}

/// Drops blank query values
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
