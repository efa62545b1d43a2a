use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health status enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Database answered the round-trip query
    Healthy,
    /// Database could not be reached
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Database reachability, `ok` or `error`
    pub db: String,
    /// Driver message when the database is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Detailed health information
    pub details: Value,
}

impl HealthResponse {
    pub fn reachable(details: Value) -> Self {
        Self {
            status: HealthStatus::Healthy,
            db: "ok".to_string(),
            message: None,
            details,
        }
    }

    pub fn unreachable(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            db: "error".to_string(),
            message: Some(message.into()),
            details,
        }
    }

    /// Check if the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }

    /// Get HTTP status code for the health status
    pub fn http_status_code(&self) -> u16 {
        match self.status {
            HealthStatus::Healthy => 200,
            HealthStatus::Unhealthy => 503,
        }
    }
}
