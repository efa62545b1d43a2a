//! HTTP routes module
//!
//! All routes live under `/api`.

pub mod builder;
pub mod health;
pub mod metrics;
pub mod operations;
pub mod views;

// Re-export commonly used types
pub use builder::{RouteBuilder, RouteUseCases};
pub use health::HealthRoutes;
pub use metrics::MetricsRoutes;
pub use operations::OperationRoutes;
pub use views::ViewRoutes;
