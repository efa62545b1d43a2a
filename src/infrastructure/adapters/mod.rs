//! Infrastructure adapters module
//!
//! Adapters for the database and for metrics collection.

pub mod gateway;
pub mod monitoring;
pub mod mysql_gateway;

pub use gateway::{DatabaseGateway, ViewRow};
pub use monitoring::{MonitoringAdapter, Outcome};
pub use mysql_gateway::MySqlGateway;
