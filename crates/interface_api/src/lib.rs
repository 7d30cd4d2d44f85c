//! HTTP API Layer
//!
//! This crate provides the REST API for the fund bookkeeping system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for funds, transactions and health
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(storage, config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::BlobStore;
use domain_fund::{FundBook, Ledger};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{fund, health, transaction};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
///
/// Handlers that touch both stores lock `funds` before `ledger`.
#[derive(Clone)]
pub struct AppState {
    pub funds: Arc<Mutex<FundBook>>,
    pub ledger: Arc<Mutex<Ledger>>,
    pub config: ApiConfig,
}

impl AppState {
    /// Opens both stores on the given storage medium
    pub fn new(storage: Arc<dyn BlobStore>, config: ApiConfig) -> Self {
        Self {
            funds: Arc::new(Mutex::new(FundBook::open(storage.clone()))),
            ledger: Arc::new(Mutex::new(Ledger::open(storage))),
            config,
        }
    }

    pub fn funds(&self) -> Result<MutexGuard<'_, FundBook>, ApiError> {
        self.funds
            .lock()
            .map_err(|_| ApiError::Internal("fund catalog lock poisoned".into()))
    }

    pub fn ledger(&self) -> Result<MutexGuard<'_, Ledger>, ApiError> {
        self.ledger
            .lock()
            .map_err(|_| ApiError::Internal("ledger lock poisoned".into()))
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared stores and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Fund routes
    let fund_routes = Router::new()
        .route("/", get(fund::list_funds).post(fund::create_fund))
        .route("/categories", get(fund::list_categories))
        .route(
            "/:code",
            get(fund::get_fund)
                .put(fund::update_fund)
                .delete(fund::delete_fund),
        );

    // Transaction routes
    let transaction_routes = Router::new()
        .route(
            "/",
            get(transaction::list_transactions).post(transaction::create_transaction),
        )
        .route("/preview", post(transaction::preview_transaction))
        .route(
            "/:id",
            put(transaction::update_transaction).delete(transaction::delete_transaction),
        );

    let api_routes = Router::new()
        .nest("/funds", fund_routes)
        .nest("/transactions", transaction_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
