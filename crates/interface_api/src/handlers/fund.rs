//! Fund catalog handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use domain_fund::{Fund, FundError, PersistOutcome, AIMC_CATEGORIES};

use crate::dto::fund::*;
use crate::error::ApiError;
use crate::AppState;

fn log_persist(outcome: &PersistOutcome, fund_code: &str) {
    if let PersistOutcome::Failed(e) = outcome {
        warn!(fund_code = %fund_code, error = %e, "Fund change kept in memory only");
    }
}

/// Lists funds, newest inception date first
pub async fn list_funds(
    State(state): State<AppState>,
    Query(query): Query<FundQuery>,
) -> Result<Json<Vec<FundResponse>>, ApiError> {
    let criteria = query.into_criteria()?;
    let funds = state.funds()?.search(&criteria);
    Ok(Json(funds.into_iter().map(FundResponse::from).collect()))
}

/// Suggested AIMC category names
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(AIMC_CATEGORIES.to_vec())
}

/// Gets a fund by code
pub async fn get_fund(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<FundResponse>, ApiError> {
    let book = state.funds()?;
    let fund = book.resolve(&code)?;
    Ok(Json(FundResponse::from(fund.clone())))
}

/// Creates a fund, or replaces the one with the same code
pub async fn create_fund(
    State(state): State<AppState>,
    Json(request): Json<FundRequest>,
) -> Result<(StatusCode, Json<FundResponse>), ApiError> {
    let fund = Fund::from(request);
    let outcome = state.funds()?.save(fund.clone())?;
    log_persist(&outcome, &fund.fund_code);
    Ok((StatusCode::CREATED, Json(FundResponse::from(fund))))
}

/// Replaces an existing fund; the code in the body must match the path
pub async fn update_fund(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<FundRequest>,
) -> Result<Json<FundResponse>, ApiError> {
    let fund = Fund::from(request);
    if fund.fund_code != code {
        return Err(FundError::FundCodeMismatch {
            expected: code,
            actual: fund.fund_code,
        }
        .into());
    }

    let mut book = state.funds()?;
    book.resolve(&code)?;
    let outcome = book.save(fund.clone())?;
    log_persist(&outcome, &code);
    Ok(Json(FundResponse::from(fund)))
}

/// Deletes a fund; unknown codes succeed silently
pub async fn delete_fund(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    let outcome = state.funds()?.delete(&code);
    log_persist(&outcome, &code);
    Ok(StatusCode::NO_CONTENT)
}
