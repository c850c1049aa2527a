//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Every failure
//! leaves the service as `{"status": <int>, "message": <string>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::BankingError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Prefix applied to banking errors without a dedicated status code
pub const UNEXPECTED_ERROR_PREFIX: &str = "An unexpected banking error occurred: ";

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] BankingError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Status code as an axum `StatusCode`
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Classify a banking error into its client-facing response.
///
/// Rules are evaluated top to bottom and the first match wins. Categorised
/// errors keep their message verbatim; everything else is reported as a 500
/// with a generic prefix.
pub fn map_banking_error(err: &BankingError) -> ErrorResponse {
    tracing::warn!(kind = err.kind(), "Banking error: {}", err);

    let status = if err.is_not_found() {
        // 404 Not Found
        StatusCode::NOT_FOUND
    } else if err.is_client_error() {
        // 400 Bad Request
        StatusCode::BAD_REQUEST
    } else {
        match err {
            BankingError::ResourceConflict(_) => StatusCode::CONFLICT,
            BankingError::UnauthorizedAccess(_) => StatusCode::UNAUTHORIZED,
            BankingError::TransactionTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            BankingError::AccountLocked(_) => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            _ => {
                return ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{}{}", UNEXPECTED_ERROR_PREFIX, err.message()),
                );
            }
        }
    };

    ErrorResponse::new(status, err.message())
}

impl IntoResponse for BankingError {
    fn into_response(self) -> Response {
        map_banking_error(&self).into_response()
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Domain(domain_err) => map_banking_error(domain_err),
            AppError::InvalidRequest(msg) => ErrorResponse::new(StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from(&self).into_response()
    }
}
