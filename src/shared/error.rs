//! Error handling module
//!
//! This module provides centralized error handling for the application.

use serde_json::Value;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client input rejected before any database access
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid view: {0}")]
    InvalidView(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(u64),

    /// Database failure after validation passed; message is the driver's
    #[error("Database error: {0}")]
    Downstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message shown to the client
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.reason.clone(),
            AppError::InvalidView(_) => "Invalid view".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::PayloadTooLarge(_) => "Request body too large".to_string(),
            AppError::Downstream(msg) => msg.clone(),
            AppError::Config(msg) | AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Convert to the JSON error body
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "error": self.client_message() })
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::InvalidView(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => warp::http::StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Downstream(_) => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures caused by the client's input
    pub fn is_client_error(&self) -> bool {
        self.http_status_code().is_client_error()
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", err))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => AppError::Downstream(db.message().to_string()),
            other => AppError::Downstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::http::StatusCode;

    #[test]
    fn validation_maps_to_bad_request_with_raw_reason() {
        let err = AppError::from(ValidationError::new("ip_city", "'ip_city' length must be 1-100"));
        assert_eq!(err.http_status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_json()["error"], "'ip_city' length must be 1-100");
        assert!(err.is_client_error());
    }

    #[test]
    fn downstream_message_passes_through() {
        let err = AppError::Downstream("Duplicate entry 'ATL' for key 'PRIMARY'".to_string());
        assert_eq!(err.http_status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_json()["error"], "Duplicate entry 'ATL' for key 'PRIMARY'");
    }

    #[test]
    fn invalid_view_uses_fixed_message() {
        let err = AppError::InvalidView("airplane".to_string());
        assert_eq!(err.http_status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Invalid view");
    }

    #[test]
    fn non_database_sqlx_errors_are_downstream() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Downstream(_)));
    }
}
