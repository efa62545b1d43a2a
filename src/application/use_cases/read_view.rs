use crate::{
    application::services::ViewService,
    domain::ViewName,
    infrastructure::adapters::{MonitoringAdapter, Outcome, ViewRow},
    shared::{error::AppResult, logging::LoggingUtils},
};
use std::sync::Arc;
use std::time::Instant;

/// View read use case
pub struct ReadViewUseCase {
    view_service: Arc<ViewService>,
    monitoring: Arc<MonitoringAdapter>,
    log_requests: bool,
}

impl ReadViewUseCase {
    pub fn new(view_service: Arc<ViewService>, monitoring: Arc<MonitoringAdapter>) -> Self {
        Self {
            view_service,
            monitoring,
            log_requests: true,
        }
    }

    /// Toggle the per-request "Processing request" log line
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    pub async fn execute(&self, name: &str, client_ip: &str) -> AppResult<Vec<ViewRow>> {
        let request_id = LoggingUtils::generate_request_id();
        let operation = format!("view:{}", name);
        if self.log_requests {
            LoggingUtils::log_request(&request_id, &operation, client_ip);
        }

        let start = Instant::now();
        let result = self.view_service.read(name).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let outcome = Outcome::of(&result);
        match result {
            Ok((view, rows)) => {
                self.monitoring.record_view_read(view.as_str(), outcome);
                LoggingUtils::log_success(&request_id, &operation, elapsed_ms);
                Ok(rows)
            }
            Err(e) => {
                // Raw names stay out of metric labels
                let label = name
                    .parse::<ViewName>()
                    .map(|v| v.as_str())
                    .unwrap_or("invalid");
                self.monitoring.record_view_read(label, outcome);
                LoggingUtils::log_error(&request_id, &operation, &e, elapsed_ms);
                Err(e)
            }
        }
    }
}
