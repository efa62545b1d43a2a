//! Configuration validation module
//!
//! Cross-field checks beyond what the validator derive expresses.

use crate::config::app_config::{DatabaseConfig, SecurityConfig};
use crate::config::AppConfig;
use crate::shared::error::AppError;

const HTTP_METHODS: [&str; 6] = ["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_database_config(&config.database)?;
        Self::validate_security_config(&config.security)?;
        Self::validate_log_format(&config.logging.format)?;

        Ok(())
    }

    /// Validate database settings
    fn validate_database_config(database: &DatabaseConfig) -> crate::Result<()> {
        if !database
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(AppError::Config(format!(
                "Invalid database name: {}",
                database.name
            )));
        }

        if database.password.is_empty() {
            tracing::warn!("Database password is empty - only suitable for local development");
        }

        Ok(())
    }

    /// Validate security configuration
    fn validate_security_config(security: &SecurityConfig) -> crate::Result<()> {
        if security.cors_origins.iter().any(|o| o == "*") {
            tracing::warn!("CORS is configured to allow any origin");
        }

        for method in &security.cors_methods {
            if !HTTP_METHODS.contains(&method.as_str()) {
                return Err(AppError::Config(format!("Invalid CORS method: {}", method)));
            }
        }

        Ok(())
    }

    fn validate_log_format(format: &str) -> crate::Result<()> {
        match format.to_ascii_lowercase().as_str() {
            "json" | "text" => Ok(()),
            other => Err(AppError::Config(format!("Unsupported log format: {}", other))),
        }
    }
}
