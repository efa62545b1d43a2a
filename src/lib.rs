//! Flight Tracking Gateway - validating HTTP front for the flight tracking database
//!
//! Every write request is checked against the rule set of its operation and
//! only then dispatched, as positional arguments, to the matching stored
//! procedure. Read-only views are served from a fixed allow-list.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
