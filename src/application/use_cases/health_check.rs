use crate::{
    domain::health::HealthResponse,
    infrastructure::adapters::DatabaseGateway,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health check use case
pub struct HealthCheckUseCase {
    gateway: Arc<dyn DatabaseGateway>,
}

impl HealthCheckUseCase {
    pub fn new(gateway: Arc<dyn DatabaseGateway>) -> Self {
        Self { gateway }
    }

    /// Ping the database. Never fails: an unreachable database is reported
    /// in the response.
    pub async fn execute(&self) -> HealthResponse {
        let details = json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
        });

        match self.gateway.ping().await {
            Ok(()) => HealthResponse::reachable(details),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                HealthResponse::unreachable(e.client_message(), details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HealthStatus;
    use crate::tests::common::RecordingGateway;

    #[tokio::test]
    async fn reachable_database_is_healthy() {
        let uc = HealthCheckUseCase::new(Arc::new(RecordingGateway::new()));
        let health = uc.execute().await;

        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.db, "ok");
        assert!(health.message.is_none());
        assert!(health.details.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn unreachable_database_carries_message() {
        let uc = HealthCheckUseCase::new(Arc::new(RecordingGateway::unreachable("Connection refused")));
        let health = uc.execute().await;

        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert_eq!(health.db, "error");
        assert_eq!(health.message.as_deref(), Some("Connection refused"));
        assert_eq!(health.http_status_code(), 503);
    }
}
