//! Write operation handler
//!
//! Every write route funnels into one handler: the routed request is
//! validated, dispatched, and the outcome rendered as JSON.

use std::sync::Arc;

use warp::Reply;

use crate::{
    application::use_cases::ExecuteOperationUseCase,
    infrastructure::http::{models::DispatchRequest, responses::ResponseFormatter},
};

pub async fn handle_operation_request(
    request: DispatchRequest,
    client_ip: String,
    use_case: Arc<ExecuteOperationUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match use_case
        .execute(request.operation, request.input, &client_ip)
        .await
    {
        Ok(()) => ResponseFormatter::ok(),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };

    Ok(response)
}
