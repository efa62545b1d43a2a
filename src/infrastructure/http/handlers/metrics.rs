//! Metrics handler module

use std::sync::Arc;

use warp::http::StatusCode;
use warp::Reply;

use crate::{
    application::use_cases::GetMetricsUseCase,
    infrastructure::http::responses::ResponseFormatter,
};

/// Handle Prometheus metrics requests
pub async fn handle_prometheus_request(
    metrics_use_case: Arc<GetMetricsUseCase>,
) -> Result<warp::reply::Response, warp::reject::Rejection> {
    let response = match metrics_use_case.execute() {
        Ok(metrics) => warp::reply::with_header(
            warp::reply::with_status(metrics, StatusCode::OK),
            "Content-Type",
            "text/plain; version=0.0.4; charset=utf-8",
        )
        .into_response(),
        Err(e) => ResponseFormatter::from_app_error(&e).into_response(),
    };

    Ok(response)
}
