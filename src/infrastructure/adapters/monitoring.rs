//! Monitoring adapter for metrics and observability
//!
//! Prometheus counters and histograms for operation dispatch and view reads,
//! exposed in text exposition format.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::shared::error::{AppError, AppResult};

/// Outcome label recorded for each request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Rejected,
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Rejected => "rejected",
            Outcome::Failed => "failed",
        }
    }

    /// Classify a finished request by its result
    pub fn of<T>(result: &AppResult<T>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(e) if e.is_client_error() => Outcome::Rejected,
            Err(_) => Outcome::Failed,
        }
    }
}

/// Adapter for Prometheus metrics
pub struct MonitoringAdapter {
    registry: Registry,
    operations_total: IntCounterVec,
    operation_duration: HistogramVec,
    view_reads_total: IntCounterVec,
}

impl MonitoringAdapter {
    /// Create a new monitoring adapter with its own registry
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let operations_total = IntCounterVec::new(
            Opts::new(
                "flight_tracking_operations_total",
                "Write operations by procedure and outcome",
            ),
            &["operation", "outcome"],
        )
        .map_err(metrics_error)?;

        let operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "flight_tracking_operation_duration_seconds",
                "Time spent validating and dispatching write operations",
            ),
            &["operation"],
        )
        .map_err(metrics_error)?;

        let view_reads_total = IntCounterVec::new(
            Opts::new("flight_tracking_view_reads_total", "View reads by view and outcome"),
            &["view", "outcome"],
        )
        .map_err(metrics_error)?;

        registry
            .register(Box::new(operations_total.clone()))
            .map_err(metrics_error)?;
        registry
            .register(Box::new(operation_duration.clone()))
            .map_err(metrics_error)?;
        registry
            .register(Box::new(view_reads_total.clone()))
            .map_err(metrics_error)?;

        Ok(Self {
            registry,
            operations_total,
            operation_duration,
            view_reads_total,
        })
    }

    /// Record one finished write operation
    pub fn record_operation(&self, operation: &str, outcome: Outcome, elapsed_seconds: f64) {
        self.operations_total
            .with_label_values(&[operation, outcome.as_str()])
            .inc();
        self.operation_duration
            .with_label_values(&[operation])
            .observe(elapsed_seconds);
    }

    /// Record one view read. Unknown view names are labelled `invalid`.
    pub fn record_view_read(&self, view: &str, outcome: Outcome) {
        self.view_reads_total
            .with_label_values(&[view, outcome.as_str()])
            .inc();
    }

    pub fn operation_count(&self, operation: &str, outcome: Outcome) -> u64 {
        self.operations_total
            .with_label_values(&[operation, outcome.as_str()])
            .get()
    }

    /// Get Prometheus metrics in text format
    pub fn get_prometheus_metrics(&self) -> AppResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_error)?;
        String::from_utf8(buffer).map_err(|e| AppError::Internal(e.to_string()))
    }
}

fn metrics_error(err: prometheus::Error) -> AppError {
    AppError::Internal(format!("Metrics error: {}", err))
}
