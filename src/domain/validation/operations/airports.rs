use crate::domain::validation::primitives::{require_str, StrRule};
use crate::domain::validation::registry::OperationRegistry;
use crate::domain::validation::types::{
    Operation, OperationDescriptor, OperationInput, ProcedureArg, ValidationResult,
};

pub fn register_airports(registry: &mut OperationRegistry) {
    registry.register(OperationDescriptor {
        operation: Operation::AddAirport,
        procedure: "add_airport",
        parameters: &[
            "ip_airportID",
            "ip_airport_name",
            "ip_city",
            "ip_state",
            "ip_country",
            "ip_locationID",
        ],
        rules: add_airport,
    });
}

pub fn add_airport(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let d = &input.body;

    let airport_id = require_str(d, "ip_airportID", StrRule::exact(3))?;
    let name = require_str(d, "ip_airport_name", StrRule::max(200))?;
    let city = require_str(d, "ip_city", StrRule::max(100))?;
    let state = require_str(d, "ip_state", StrRule::max(100))?;
    let country = require_str(d, "ip_country", StrRule::exact(3))?;
    let location = require_str(d, "ip_locationID", StrRule::max(50))?;

    Ok(vec![
        airport_id.into(),
        name.into(),
        city.into(),
        state.into(),
        country.into(),
        location.into(),
    ])
}
