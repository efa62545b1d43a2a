//! Infrastructure layer - External concerns and adapters
//!
//! The database gateway, metrics and the HTTP surface.

pub mod adapters;
pub mod http;

pub use adapters::{DatabaseGateway, MonitoringAdapter, MySqlGateway};
