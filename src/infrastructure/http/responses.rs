//! HTTP responses module
//!
//! Response formatting and the rejection handler that turns every routing
//! failure into a JSON error body.

use std::convert::Infallible;

use serde::Serialize;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Rejection, Reply};

use crate::{
    domain::health::HealthResponse,
    infrastructure::http::models::{ErrorResponse, StatusResponse},
    shared::error::AppError,
};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// `200 {"status":"OK"}`
    pub fn ok() -> WithStatus<Json> {
        Self::json(&StatusResponse::ok(), StatusCode::OK)
    }

    /// `200` with a JSON body
    pub fn success<T: Serialize>(body: &T) -> WithStatus<Json> {
        Self::json(body, StatusCode::OK)
    }

    /// Format an error response with status code
    pub fn error_with_status(message: impl Into<String>, status: StatusCode) -> WithStatus<Json> {
        Self::json(&ErrorResponse::new(message), status)
    }

    /// Format an application error
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        Self::error_with_status(error.client_message(), error.http_status_code())
    }

    pub fn health(health: &HealthResponse) -> WithStatus<Json> {
        let status = StatusCode::from_u16(health.http_status_code())
            .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        Self::json(health, status)
    }

    fn json<T: Serialize>(body: &T, status: StatusCode) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(body), status)
    }
}

/// Recover handler for rejections that escaped the route handlers
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let response = if err.is_not_found() {
        ResponseFormatter::error_with_status("Not found", StatusCode::NOT_FOUND)
    } else if let Some(app_error) = err.find::<AppError>() {
        ResponseFormatter::from_app_error(app_error)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ResponseFormatter::error_with_status("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ResponseFormatter::error_with_status("Request body too large", StatusCode::PAYLOAD_TOO_LARGE)
    } else if err.find::<warp::reject::InvalidHeader>().is_some()
        || err.find::<warp::reject::MissingHeader>().is_some()
    {
        ResponseFormatter::error_with_status("Bad request", StatusCode::BAD_REQUEST)
    } else {
        error!(rejection = ?err, "Unhandled rejection");
        ResponseFormatter::error_with_status("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(response)
}
