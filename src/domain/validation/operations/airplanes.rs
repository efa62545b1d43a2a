use crate::domain::validation::primitives::{
    is_present, is_truthy, optional_bool, optional_str, require_bool, require_int, require_str,
    IntRule, StrRule,
};
use crate::domain::validation::registry::OperationRegistry;
use crate::domain::validation::types::{
    Operation, OperationDescriptor, OperationInput, ProcedureArg, ValidationError, ValidationResult,
};

pub fn register_airplanes(registry: &mut OperationRegistry) {
    registry.register(OperationDescriptor {
        operation: Operation::AddAirplane,
        procedure: "add_airplane",
        parameters: &[
            "ip_airlineID",
            "ip_tail_num",
            "ip_seat_capacity",
            "ip_speed",
            "ip_locationID",
            "ip_plane_type",
            "ip_maintenanced",
            "ip_model",
            "ip_neo",
        ],
        rules: add_airplane,
    });
}

/// Manufacturer-specific attributes carried by an airplane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaneFamily {
    Airbus,
    Boeing,
    Other,
}

impl PlaneFamily {
    fn classify(plane_type: &str) -> Self {
        match plane_type.to_lowercase().as_str() {
            "airbus" => PlaneFamily::Airbus,
            "boeing" => PlaneFamily::Boeing,
            _ => PlaneFamily::Other,
        }
    }
}

pub fn add_airplane(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let d = &input.body;

    let airline = require_str(d, "ip_airlineID", StrRule::max(50))?;
    let tail = require_str(d, "ip_tail_num", StrRule::max(50))?;
    let seat_capacity = require_int(d, "ip_seat_capacity", IntRule::at_least(1))?;
    let speed = require_int(d, "ip_speed", IntRule::at_least(1))?;
    let location = optional_str(d, "ip_locationID", StrRule::max(50))?;
    let plane_type = require_str(d, "ip_plane_type", StrRule::max(100))?;
    let maintenanced = require_bool(d, "ip_maintenanced")?;

    let (model, neo) = match PlaneFamily::classify(&plane_type) {
        PlaneFamily::Airbus => {
            if !is_present(d, "ip_neo") {
                return Err(ValidationError::new("ip_neo", "Missing 'ip_neo' for Airbus"));
            }
            (None, Some(require_bool(d, "ip_neo")?))
        }
        PlaneFamily::Boeing => {
            if !is_truthy(d, "ip_model") {
                return Err(ValidationError::new("ip_model", "Missing 'ip_model' for Boeing"));
            }
            (Some(require_str(d, "ip_model", StrRule::max(50))?), None)
        }
        PlaneFamily::Other => (
            optional_str(d, "ip_model", StrRule::max(50))?,
            optional_bool(d, "ip_neo")?,
        ),
    };

    Ok(vec![
        airline.into(),
        tail.into(),
        seat_capacity.into(),
        speed.into(),
        location.into(),
        plane_type.into(),
        maintenanced.into(),
        model.into(),
        neo.into(),
    ])
}
