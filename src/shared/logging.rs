//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info, warn};

use crate::config::app_config::LoggingConfig;
use crate::shared::error::AppError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration. `RUST_LOG`
    /// overrides the configured level.
    pub fn initialize(config: &LoggingConfig) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if config.format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an incoming operation request
    pub fn log_request(request_id: &str, operation: &str, client_ip: &str) {
        info!(
            request_id = %request_id,
            operation = %operation,
            client_ip = %client_ip,
            "Processing request"
        );
    }

    /// Log a successful dispatch
    pub fn log_success(request_id: &str, operation: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            operation = %operation,
            duration_ms = %duration_ms,
            "Request completed successfully"
        );
    }

    /// Log a failed request; client faults at warn, everything else at error
    pub fn log_error(request_id: &str, operation: &str, error: &AppError, duration_ms: u64) {
        if error.is_client_error() {
            warn!(
                request_id = %request_id,
                operation = %operation,
                error = %error,
                duration_ms = %duration_ms,
                "Request rejected"
            );
        } else {
            error!(
                request_id = %request_id,
                operation = %operation,
                error = %error,
                duration_ms = %duration_ms,
                "Request failed"
            );
        }
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
