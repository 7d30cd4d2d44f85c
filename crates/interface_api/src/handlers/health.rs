//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use domain_fund::LoadOutcome;

use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub funds: StoreStatus,
    pub transactions: StoreStatus,
}

/// How a store was initialised
#[derive(Serialize)]
pub struct StoreStatus {
    pub restored: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl StoreStatus {
    fn new(outcome: &LoadOutcome, count: usize) -> Self {
        match outcome {
            LoadOutcome::Loaded { .. } => Self {
                restored: true,
                count,
                fallback: None,
            },
            LoadOutcome::Fallback(reason) => Self {
                restored: false,
                count,
                fallback: Some(format!("{:?}", reason)),
            },
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check, reporting how each store was loaded
///
/// Storage failures never make the service unready; the stores run from
/// their seed collections instead.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    let funds = {
        let book = state.funds()?;
        StoreStatus::new(book.load_outcome(), book.len())
    };
    let transactions = {
        let ledger = state.ledger()?;
        StoreStatus::new(ledger.load_outcome(), ledger.len())
    };

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        funds,
        transactions,
    }))
}
