use crate::domain::validation::primitives::{
    is_truthy, require_int, require_path_param, require_str, IntRule, StrRule,
};
use crate::domain::validation::registry::OperationRegistry;
use crate::domain::validation::types::{
    Operation, OperationDescriptor, OperationInput, ProcedureArg, ValidationResult,
};

pub fn register_people(registry: &mut OperationRegistry) {
    registry.register(OperationDescriptor {
        operation: Operation::AddPerson,
        procedure: "add_person",
        parameters: &[
            "ip_personID",
            "ip_first_name",
            "ip_last_name",
            "ip_locationID",
            "ip_taxID",
            "ip_experience",
            "ip_miles",
            "ip_funds",
        ],
        rules: add_person,
    });

    registry.register(OperationDescriptor {
        operation: Operation::GrantOrRevokePilotLicense,
        procedure: "grant_or_revoke_pilot_license",
        parameters: &["ip_personID", "ip_license"],
        rules: grant_or_revoke_pilot_license,
    });
}

/// A person is either a pilot-eligible employee or a paying customer
enum PersonRole {
    Employee { tax_id: String, experience: i64 },
    Customer { miles: i64, funds: i64 },
}

pub fn add_person(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let d = &input.body;

    let person_id = require_str(d, "ip_personID", StrRule::max(50))?;
    let first_name = require_str(d, "ip_first_name", StrRule::max(100))?;
    let last_name = if is_truthy(d, "ip_last_name") {
        Some(require_str(d, "ip_last_name", StrRule::max(100))?)
    } else {
        None
    };
    let location = require_str(d, "ip_locationID", StrRule::max(50))?;

    let role = if is_truthy(d, "ip_taxID") {
        PersonRole::Employee {
            tax_id: require_str(d, "ip_taxID", StrRule::max(50))?,
            experience: require_int(d, "ip_experience", IntRule::at_least(0))?,
        }
    } else {
        PersonRole::Customer {
            miles: require_int(d, "ip_miles", IntRule::at_least(0))?,
            funds: require_int(d, "ip_funds", IntRule::at_least(0))?,
        }
    };

    let (tax_id, experience, miles, funds) = match role {
        PersonRole::Employee { tax_id, experience } => (Some(tax_id), Some(experience), None, None),
        PersonRole::Customer { miles, funds } => (None, None, Some(miles), Some(funds)),
    };

    Ok(vec![
        person_id.into(),
        first_name.into(),
        last_name.into(),
        location.into(),
        tax_id.into(),
        experience.into(),
        miles.into(),
        funds.into(),
    ])
}

pub fn grant_or_revoke_pilot_license(input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    let person_id = require_path_param(input.path_id.as_deref(), "person_id")?;
    let license = require_str(&input.body, "ip_license", StrRule::max(100))?;

    Ok(vec![person_id.into(), license.into()])
}
