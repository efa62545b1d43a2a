//! Route builder module
//!
//! Orchestrates the creation of all application routes and wraps them with
//! the rejection handler and CORS.

use crate::{
    application::use_cases::{
        ExecuteOperationUseCase, GetMetricsUseCase, HealthCheckUseCase, ReadViewUseCase,
    },
    config::AppConfig,
    infrastructure::http::{
        responses::handle_rejection,
        routes::{HealthRoutes, MetricsRoutes, OperationRoutes, ViewRoutes},
    },
    middleware::CorsMiddleware,
    shared::error::AppResult,
};
use std::sync::Arc;
use warp::Filter;

/// Use cases the routes dispatch to
#[derive(Clone)]
pub struct RouteUseCases {
    pub operations: Arc<ExecuteOperationUseCase>,
    pub views: Arc<ReadViewUseCase>,
    pub health: Arc<HealthCheckUseCase>,
    pub metrics: Arc<GetMetricsUseCase>,
}

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: &AppConfig,
        use_cases: RouteUseCases,
    ) -> AppResult<impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone> {
        let cors = CorsMiddleware::new(config).filter()?;

        let operation_routes =
            OperationRoutes::create_operation_routes(config, use_cases.operations);
        let view_route = ViewRoutes::create_view_route(use_cases.views);
        let health_route = HealthRoutes::create_health_route(use_cases.health);
        let metrics_route = MetricsRoutes::create_prometheus_route(use_cases.metrics);

        Ok(health_route
            .or(view_route)
            .or(operation_routes)
            .or(metrics_route)
            .recover(handle_rejection)
            .with(cors))
    }
}
