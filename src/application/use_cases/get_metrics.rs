use crate::{infrastructure::adapters::MonitoringAdapter, shared::error::AppResult};
use std::sync::Arc;

/// Prometheus exposition use case
pub struct GetMetricsUseCase {
    monitoring: Arc<MonitoringAdapter>,
}

impl GetMetricsUseCase {
    pub fn new(monitoring: Arc<MonitoringAdapter>) -> Self {
        Self { monitoring }
    }

    pub fn execute(&self) -> AppResult<String> {
        self.monitoring.get_prometheus_metrics()
    }
}
