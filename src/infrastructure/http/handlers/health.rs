//! Health check handler module
//!
//! Reports database reachability for load balancers and orchestrators.

use std::sync::Arc;

use warp::Reply;

use crate::{
    application::use_cases::HealthCheckUseCase,
    infrastructure::http::responses::ResponseFormatter,
};

/// Handle health check requests
pub async fn handle_health_request(
    health_use_case: Arc<HealthCheckUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let health_response = health_use_case.execute().await;
    Ok(ResponseFormatter::health(&health_response))
}
