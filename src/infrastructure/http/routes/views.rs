//! View routes

use std::sync::Arc;

use warp::Filter;

use crate::{
    application::use_cases::ReadViewUseCase,
    infrastructure::http::{
        handlers::handle_view_request,
        utils::{client_ip, with_view_use_case},
    },
};

pub struct ViewRoutes;

impl ViewRoutes {
    /// `GET /api/views/{view_name}`
    pub fn create_view_route(
        use_case: Arc<ReadViewUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("api" / "views" / String)
            .and(warp::get())
            .and(client_ip())
            .and(with_view_use_case(use_case))
            .and_then(handle_view_request)
    }
}
