//! View read handler

use std::sync::Arc;

use warp::Reply;

use crate::{
    application::use_cases::ReadViewUseCase,
    infrastructure::http::responses::ResponseFormatter,
};

pub async fn handle_view_request(
    view_name: String,
    client_ip: String,
    use_case: Arc<ReadViewUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match use_case.execute(&view_name, &client_ip).await {
        Ok(rows) => ResponseFormatter::success(&rows),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };

    Ok(response)
}
