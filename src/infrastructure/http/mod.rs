//! HTTP infrastructure module
//!
//! Models, server, routes, handlers, response formatting and filter
//! utilities for the HTTP surface.

pub mod handlers;
pub mod models;
pub mod responses;
pub mod routes;
pub mod server;
pub mod utils;

pub use models::{DispatchRequest, ErrorResponse, StatusResponse};
pub use responses::{handle_rejection, ResponseFormatter};
pub use server::HttpServer;
