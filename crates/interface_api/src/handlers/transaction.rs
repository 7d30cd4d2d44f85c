//! Transaction ledger handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use core_kernel::TransactionId;
use domain_fund::{preview, PersistOutcome, TransactionRequest};

use crate::dto::transaction::*;
use crate::error::ApiError;
use crate::AppState;

fn parse_id(raw: &str) -> Result<TransactionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("'{}' is not a transaction id", raw)))
}

/// Lists transactions, most recent first
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let criteria = query.into_criteria()?;
    let transactions = state.ledger()?.search(&criteria);
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

/// Prices and records a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(body): Json<TransactionBody>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let request = TransactionRequest::from(body);

    let funds = state.funds()?;
    let mut ledger = state.ledger()?;
    let transaction = ledger.add_transaction(&funds, &request)?;

    Ok((StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
}

/// Re-prices an existing transaction against the current catalog
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TransactionBody>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let id = parse_id(&id)?;
    let request = TransactionRequest::from(body);

    let funds = state.funds()?;
    let mut ledger = state.ledger()?;
    let transaction = ledger.update(&funds, &id, &request)?;

    Ok(Json(TransactionResponse::from(transaction)))
}

/// Deletes a transaction; unknown ids succeed silently
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if let PersistOutcome::Failed(e) = state.ledger()?.remove(&id) {
        warn!(id = %id, error = %e, "Ledger change kept in memory only");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Live figures for an unsaved form; an unknown fund prices as zero
pub async fn preview_transaction(
    State(state): State<AppState>,
    Json(body): Json<TransactionBody>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let request = TransactionRequest::from(body);
    let book = state.funds()?;
    let valuation = preview(book.find(&request.fund_code), &request);
    Ok(Json(PreviewResponse::from(valuation)))
}
