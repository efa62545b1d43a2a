//! Application use cases

pub mod execute_operation;
pub mod get_metrics;
pub mod health_check;
pub mod read_view;

pub use execute_operation::ExecuteOperationUseCase;
pub use get_metrics::GetMetricsUseCase;
pub use health_check::HealthCheckUseCase;
pub use read_view::ReadViewUseCase;
