use crate::domain::validation::primitives::{
    is_present, require_int, require_path_param, require_str, require_time, IntRule, StrRule,
};
use crate::domain::validation::registry::OperationRegistry;
use crate::domain::validation::types::{
    Operation, OperationDescriptor, OperationInput, ProcedureArg, ValidationError, ValidationResult,
};

const FLIGHT_ID: &[&str] = &["ip_flightID"];

pub fn register_flights(registry: &mut OperationRegistry) {
    registry.register(OperationDescriptor {
        operation: Operation::OfferFlight,
        procedure: "offer_flight",
        parameters: &[
            "ip_flightID",
            "ip_routeID",
            "ip_support_airline",
            "ip_support_tail",
            "ip_progress",
            "ip_next_time",
            "ip_cost",
        ],
        rules: offer_flight,
    });

    registry.register(OperationDescriptor {
        operation: Operation::AssignPilot,
        procedure: "assign_pilot",
        parameters: &["ip_flightID", "ip_personID"],
        rules: assign_pilot,
    });

    for (operation, procedure) in [
        (Operation::FlightLanding, "flight_landing"),
        (Operation::FlightTakeoff, "flight_takeoff"),
        (Operation::PassengersBoard, "passengers_board"),
        (Operation::PassengersDisembark, "passengers_disembark"),
        (Operation::RecycleCrew, "recycle_crew"),
        (Operation::RetireFlight, "retire_flight"),
    ] {
        registry.register(OperationDescriptor {
            operation,
            procedure,
            parameters: FLIGHT_ID,
            rules: flight_only,
        });
    }
}

pub fn offer_flight(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let d = &input.body;

    let flight_id = require_str(d, "ip_flightID", StrRule::max(50))?;
    let route_id = require_str(d, "ip_routeID", StrRule::max(50))?;

    let (support_airline, support_tail) =
        match (is_present(d, "ip_support_airline"), is_present(d, "ip_support_tail")) {
            (true, true) => (
                Some(require_str(d, "ip_support_airline", StrRule::max(50))?),
                Some(require_str(d, "ip_support_tail", StrRule::max(50))?),
            ),
            (false, false) => (None, None),
            (airline_given, _) => {
                let field = if airline_given { "ip_support_tail" } else { "ip_support_airline" };
                return Err(ValidationError::new(
                    field,
                    "Both 'ip_support_airline' and 'ip_support_tail' must be provided together or both omitted",
                ));
            }
        };

    let progress = require_int(d, "ip_progress", IntRule::at_least(0))?;
    let next_time = require_time(d, "ip_next_time")?;
    let cost = require_int(d, "ip_cost", IntRule::at_least(0))?;

    Ok(vec![
        flight_id.into(),
        route_id.into(),
        support_airline.into(),
        support_tail.into(),
        progress.into(),
        next_time.into(),
        cost.into(),
    ])
}

pub fn assign_pilot(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let flight_id = require_path_param(input.path_id.as_deref(), "flight_id")?;
    let person_id = require_str(&input.body, "ip_personID", StrRule::max(50))?;

    Ok(vec![flight_id.into(), person_id.into()])
}

/// Rule set for procedures whose only argument is the flight in the URL
pub fn flight_only(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let flight_id = require_path_param(input.path_id.as_deref(), "flight_id")?;
    Ok(vec![flight_id.into()])
}
