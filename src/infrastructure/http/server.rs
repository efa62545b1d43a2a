//! HTTP server implementation
//!
//! Wires the layers together: domain validator, database gateway, services,
//! use cases and routes.

use crate::{
    application::{
        services::{DispatchService, ViewService},
        use_cases::{ExecuteOperationUseCase, GetMetricsUseCase, HealthCheckUseCase, ReadViewUseCase},
    },
    config::AppConfig,
    domain::validation::DomainValidator,
    infrastructure::{
        adapters::{DatabaseGateway, MonitoringAdapter},
        http::routes::{RouteBuilder, RouteUseCases},
    },
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server
pub struct HttpServer {
    config: AppConfig,
    use_cases: RouteUseCases,
}

impl HttpServer {
    /// Create a new HTTP server instance over the given database gateway
    pub fn new(config: AppConfig, gateway: Arc<dyn DatabaseGateway>) -> AppResult<Self> {
        let log_requests = config.security.enable_request_logging;

        // Domain and infrastructure
        let validator = Arc::new(DomainValidator::new());
        let monitoring = Arc::new(MonitoringAdapter::new()?);

        // Application services
        let dispatch_service = Arc::new(DispatchService::new(validator, gateway.clone()));
        let view_service = Arc::new(ViewService::new(gateway.clone()));

        let use_cases = RouteUseCases {
            operations: Arc::new(
                ExecuteOperationUseCase::new(dispatch_service, monitoring.clone())
                    .with_request_logging(log_requests),
            ),
            views: Arc::new(
                ReadViewUseCase::new(view_service, monitoring.clone())
                    .with_request_logging(log_requests),
            ),
            health: Arc::new(HealthCheckUseCase::new(gateway)),
            metrics: Arc::new(GetMetricsUseCase::new(monitoring)),
        };

        Ok(Self { config, use_cases })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until the process exits
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: std::net::SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes()?;

        info!("Starting HTTP server on {}", addr);
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(
        &self,
    ) -> AppResult<impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone> {
        RouteBuilder::build_routes(&self.config, self.use_cases.clone())
    }
}
