//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_fund::FundError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Status code and machine-readable kind for the response
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Internal(msg)
            | ApiError::Validation(msg) => msg,
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<FundError> for ApiError {
    fn from(err: FundError) -> Self {
        match err {
            FundError::FundNotFound(_) | FundError::TransactionNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            FundError::FundCodeMismatch { .. } => ApiError::BadRequest(err.to_string()),
            FundError::MissingQuantity(_)
            | FundError::NonPositiveQuantity(_)
            | FundError::QuantityTooLarge(_)
            | FundError::InvalidFund(_) => ApiError::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TransactionId;
    use domain_fund::TransactionType;

    #[test]
    fn test_fund_errors_map_to_status() {
        let cases = [
            (FundError::FundNotFound("X".into()), StatusCode::NOT_FOUND),
            (
                FundError::TransactionNotFound(TransactionId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                FundError::MissingQuantity(TransactionType::Buy),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                FundError::NonPositiveQuantity(TransactionType::Sell),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                FundError::QuantityTooLarge(TransactionType::Sell),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (FundError::invalid("nav"), StatusCode::UNPROCESSABLE_ENTITY),
            (
                FundError::FundCodeMismatch {
                    expected: "A".into(),
                    actual: "B".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status().0, expected);
        }
    }
}
