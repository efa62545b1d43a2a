//! Application layer - Use cases and application services
//!
//! Orchestrates validation, dispatch to the database gateway, logging and
//! metrics for each HTTP operation.

pub mod services;
pub mod use_cases;

pub use services::*;
pub use use_cases::*;
