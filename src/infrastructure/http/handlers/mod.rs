//! HTTP route handlers module
//!
//! One handler per endpoint family. Handlers never reject: every outcome,
//! including errors, is rendered as a reply.

pub mod health;
pub mod metrics;
pub mod operations;
pub mod views;

pub use health::handle_health_request;
pub use metrics::handle_prometheus_request;
pub use operations::handle_operation_request;
pub use views::handle_view_request;
