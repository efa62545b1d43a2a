//! HTTP middleware

pub mod cors;

pub use cors::{CorsConfig, CorsMiddleware};
