//! Write operation routes
//!
//! Each route only extracts its operation and raw input; every route then
//! shares the same client IP extraction and handler. Path identifiers are
//! percent-decoded before they reach validation.

use std::sync::Arc;

use warp::filters::BoxedFilter;
use warp::Filter;

use crate::{
    application::use_cases::ExecuteOperationUseCase,
    config::AppConfig,
    domain::validation::{FieldMap, Operation},
    infrastructure::http::{
        handlers::handle_operation_request,
        models::DispatchRequest,
        utils::{client_ip, json_object_body, path_id, with_operation_use_case},
    },
};

type RequestFilter = BoxedFilter<(DispatchRequest,)>;

/// Write operation routes configuration
pub struct OperationRoutes;

impl OperationRoutes {
    /// Create every write operation route
    pub fn create_operation_routes(
        config: &AppConfig,
        use_case: Arc<ExecuteOperationUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let limit = config.server.max_request_size as u64;

        Self::body_route("airplanes", Operation::AddAirplane, limit)
            .or(Self::body_route("airports", Operation::AddAirport, limit))
            .unify()
            .or(Self::body_route("people", Operation::AddPerson, limit))
            .unify()
            .or(Self::pilot_license(limit))
            .unify()
            .or(Self::body_route("flights", Operation::OfferFlight, limit))
            .unify()
            .or(Self::flight_action("land", Operation::FlightLanding))
            .unify()
            .or(Self::flight_action("takeoff", Operation::FlightTakeoff))
            .unify()
            .or(Self::flight_action("board", Operation::PassengersBoard))
            .unify()
            .or(Self::flight_action("disembark", Operation::PassengersDisembark))
            .unify()
            .or(Self::assign_pilot(limit))
            .unify()
            .or(Self::flight_action("recycle-crew", Operation::RecycleCrew))
            .unify()
            .or(Self::retire_flight())
            .unify()
            .or(Self::simulation_cycle())
            .unify()
            .and(client_ip())
            .and(with_operation_use_case(use_case))
            .and_then(handle_operation_request)
    }

    /// `POST /api/<collection>` with a JSON body
    fn body_route(collection: &'static str, operation: Operation, limit: u64) -> RequestFilter {
        warp::path("api")
            .and(warp::path(collection))
            .and(warp::path::end())
            .and(warp::post())
            .and(json_object_body(limit))
            .map(move |body: FieldMap| DispatchRequest::body(operation, body))
            .boxed()
    }

    /// `POST /api/flights/{flight_id}/<action>`
    fn flight_action(action: &'static str, operation: Operation) -> RequestFilter {
        warp::path("api")
            .and(warp::path("flights"))
            .and(path_id())
            .and(warp::path(action))
            .and(warp::path::end())
            .and(warp::post())
            .map(move |flight_id: String| DispatchRequest::path(operation, flight_id))
            .boxed()
    }

    fn pilot_license(limit: u64) -> RequestFilter {
        warp::path("api")
            .and(warp::path("pilots"))
            .and(path_id())
            .and(warp::path("license"))
            .and(warp::path::end())
            .and(warp::post())
            .and(json_object_body(limit))
            .map(|person_id: String, body: FieldMap| {
                DispatchRequest::path_and_body(Operation::GrantOrRevokePilotLicense, person_id, body)
            })
            .boxed()
    }

    fn assign_pilot(limit: u64) -> RequestFilter {
        warp::path("api")
            .and(warp::path("flights"))
            .and(path_id())
            .and(warp::path("assign-pilot"))
            .and(warp::path::end())
            .and(warp::post())
            .and(json_object_body(limit))
            .map(|flight_id: String, body: FieldMap| {
                DispatchRequest::path_and_body(Operation::AssignPilot, flight_id, body)
            })
            .boxed()
    }

    fn retire_flight() -> RequestFilter {
        warp::path("api")
            .and(warp::path("flights"))
            .and(path_id())
            .and(warp::path::end())
            .and(warp::delete())
            .map(|flight_id: String| DispatchRequest::path(Operation::RetireFlight, flight_id))
            .boxed()
    }

    fn simulation_cycle() -> RequestFilter {
        warp::path!("api" / "simulation-cycle")
            .and(warp::post())
            .map(|| DispatchRequest::bare(Operation::SimulationCycle))
            .boxed()
    }
}
