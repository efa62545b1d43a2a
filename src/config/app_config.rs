//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Flight tracking database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// Database host
    #[validate(length(min = 1))]
    pub host: String,

    /// Database port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Database user
    #[validate(length(min = 1))]
    pub user: String,

    /// Database password
    pub password: String,

    /// Schema holding the procedures and views
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Maximum pooled connections
    #[validate(range(min = 1, max = 100))]
    pub max_connections: u32,

    /// Time to wait for a free connection (seconds)
    #[validate(range(min = 1, max = 300))]
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Connection URL without the password, for logs
    pub fn redacted_url(&self) -> String {
        format!("mysql://{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecurityConfig {
    /// Allowed CORS origins
    pub cors_origins: Vec<String>,

    /// Allowed CORS methods
    pub cors_methods: Vec<String>,

    /// Allowed CORS headers
    pub cors_headers: Vec<String>,

    /// Enable request logging
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format, `json` or `text`
    #[validate(length(min = 1))]
    pub format: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "flight_tracking".to_string(),
            max_connections: 10,
            acquire_timeout_seconds: 5,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server: ServerConfig {
                bind_address: IpAddr::from([127, 0, 0, 1]),
                port: 5000,
                max_request_size: 64 * 1024,
            },
            security: SecurityConfig {
                cors_origins: vec!["*".to_string()],
                cors_methods: vec![
                    "GET".to_string(),
                    "POST".to_string(),
                    "DELETE".to_string(),
                    "OPTIONS".to_string(),
                ],
                cors_headers: vec![
                    "Content-Type".to_string(),
                    "Accept".to_string(),
                ],
                enable_request_logging: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the optional `Conf` file and
    /// `FLIGHT_TRACKING__SECTION__KEY` environment variables, in that order
    pub fn load() -> crate::Result<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to build defaults: {}", e)))?;

        let config = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(
                config::Environment::with_prefix("FLIGHT_TRACKING")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("security.cors_origins")
                    .with_list_parse_key("security.cors_methods")
                    .with_list_parse_key("security.cors_headers")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        // Validate configuration
        config.validate_config()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Configuration validation failed: {}", e)))?;

        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate every section with its declared constraints
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.database.validate()?;
        self.server.validate()?;
        self.security.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Check if CORS is configured for any origin
    pub fn cors_allow_any_origin(&self) -> bool {
        self.security.cors_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_declared_constraints() {
        let config = AppConfig::default();
        assert!(config.validate_config().is_ok());
        assert_eq!(config.server_address(), "127.0.0.1:5000");
        assert!(config.cors_allow_any_origin());
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn redacted_url_omits_password() {
        let mut db = DatabaseConfig::default();
        db.password = "hunter2".to_string();
        let url = db.redacted_url();
        assert_eq!(url, "mysql://root@127.0.0.1:3306/flight_tracking");
        assert!(!url.contains("hunter2"));
    }
}
