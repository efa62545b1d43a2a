//! Test suite
//!
//! - `common`: the recording database gateway shared by unit tests
//! - `integration`: end-to-end requests through the full warp filter

pub mod common;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.security.enable_request_logging = false;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_valid() {
        let config = config::test_config();
        assert!(config.validate_config().is_ok());
        assert!(!config.security.enable_request_logging);
    }
}
