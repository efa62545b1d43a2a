use crate::{
    application::services::DispatchService,
    domain::validation::{Operation, OperationInput},
    infrastructure::adapters::{MonitoringAdapter, Outcome},
    shared::{error::AppResult, logging::LoggingUtils},
};
use std::sync::Arc;
use std::time::Instant;

/// Write operation use case: validate, dispatch, log and record metrics
pub struct ExecuteOperationUseCase {
    dispatch_service: Arc<DispatchService>,
    monitoring: Arc<MonitoringAdapter>,
    log_requests: bool,
}

impl ExecuteOperationUseCase {
    pub fn new(dispatch_service: Arc<DispatchService>, monitoring: Arc<MonitoringAdapter>) -> Self {
        Self {
            dispatch_service,
            monitoring,
            log_requests: true,
        }
    }

    /// Toggle the per-request "Processing request" log line
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    pub async fn execute(
        &self,
        operation: Operation,
        input: OperationInput,
        client_ip: &str,
    ) -> AppResult<()> {
        let request_id = LoggingUtils::generate_request_id();
        let name = operation.procedure_name();
        if self.log_requests {
            LoggingUtils::log_request(&request_id, name, client_ip);
        }

        let start = Instant::now();
        let result = self
            .dispatch_service
            .dispatch(operation, &input)
            .await
            .map(|_| ());
        let elapsed = start.elapsed();

        self.monitoring
            .record_operation(name, Outcome::of(&result), elapsed.as_secs_f64());

        match &result {
            Ok(()) => LoggingUtils::log_success(&request_id, name, elapsed.as_millis() as u64),
            Err(e) => LoggingUtils::log_error(&request_id, name, e, elapsed.as_millis() as u64),
        }

        result
    }
}
