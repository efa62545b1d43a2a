//! CORS middleware
//!
//! Builds the warp CORS filter from the security section of the
//! configuration. Every value is checked up front because the warp builder
//! panics on malformed origins and header names.

use crate::config::AppConfig;
use crate::shared::error::{AppError, AppResult};
use tracing::info;
use warp::http::{header::HeaderName, Method};

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    pub headers: Vec<String>,
}

impl CorsConfig {
    /// Load CORS configuration from app config
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            origins: config.security.cors_origins.clone(),
            methods: config.security.cors_methods.clone(),
            headers: config.security.cors_headers.clone(),
        }
    }
}

/// CORS middleware
pub struct CorsMiddleware {
    config: CorsConfig,
}

impl CorsMiddleware {
    /// Create a new CORS middleware
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: CorsConfig::from_app_config(config),
        }
    }

    /// Check if CORS allows any origin
    pub fn allows_any_origin(&self) -> bool {
        self.config.origins.iter().any(|o| o == "*")
    }

    /// Validate CORS configuration
    pub fn validate_config(&self) -> AppResult<()> {
        if !self.allows_any_origin() {
            for origin in &self.config.origins {
                if !Self::is_valid_origin(origin) {
                    return Err(AppError::Config(format!("Invalid CORS origin: {}", origin)));
                }
            }
        }

        for method in &self.config.methods {
            if Method::from_bytes(method.as_bytes()).is_err() {
                return Err(AppError::Config(format!("Invalid CORS method: {}", method)));
            }
        }

        for header in &self.config.headers {
            if HeaderName::from_bytes(header.as_bytes()).is_err() {
                return Err(AppError::Config(format!("Invalid CORS header: {}", header)));
            }
        }

        Ok(())
    }

    /// `scheme://host[:port]` with nothing after the authority
    fn is_valid_origin(origin: &str) -> bool {
        let authority = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"));

        match authority {
            Some(rest) => !rest.is_empty() && !rest.contains('/'),
            None => false,
        }
    }

    /// Build the warp CORS filter
    pub fn filter(&self) -> AppResult<warp::cors::Cors> {
        self.validate_config()?;

        let mut builder = warp::cors()
            .allow_methods(self.config.methods.iter().map(String::as_str))
            .allow_headers(self.config.headers.iter().map(String::as_str))
            .max_age(3600);

        builder = if self.allows_any_origin() {
            builder.allow_any_origin()
        } else {
            builder.allow_origins(self.config.origins.iter().map(String::as_str))
        };

        info!(
            origins = ?self.config.origins,
            methods = ?self.config.methods,
            "CORS filter configured"
        );

        Ok(builder.build())
    }
}
