use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Raw request body as received from the client
pub type FieldMap = Map<String, Value>;

/// Outcome of a single validation step
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected request: the offending field and a client-facing reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Typed positional argument passed to a stored procedure
#[derive(Debug, Clone, PartialEq)]
pub enum ProcedureArg {
    /// Absence marker for optional or branch-excluded parameters
    Null,
    Text(String),
    Integer(i64),
    Boolean(bool),
    Time(NaiveTime),
}

impl ProcedureArg {
    pub fn is_null(&self) -> bool {
        matches!(self, ProcedureArg::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ProcedureArg::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Option<String>> for ProcedureArg {
    fn from(value: Option<String>) -> Self {
        value.map(ProcedureArg::Text).unwrap_or(ProcedureArg::Null)
    }
}

impl From<Option<i64>> for ProcedureArg {
    fn from(value: Option<i64>) -> Self {
        value.map(ProcedureArg::Integer).unwrap_or(ProcedureArg::Null)
    }
}

impl From<Option<bool>> for ProcedureArg {
    fn from(value: Option<bool>) -> Self {
        value.map(ProcedureArg::Boolean).unwrap_or(ProcedureArg::Null)
    }
}

impl From<String> for ProcedureArg {
    fn from(value: String) -> Self {
        ProcedureArg::Text(value)
    }
}

impl From<i64> for ProcedureArg {
    fn from(value: i64) -> Self {
        ProcedureArg::Integer(value)
    }
}

impl From<bool> for ProcedureArg {
    fn from(value: bool) -> Self {
        ProcedureArg::Boolean(value)
    }
}

impl From<NaiveTime> for ProcedureArg {
    fn from(value: NaiveTime) -> Self {
        ProcedureArg::Time(value)
    }
}

// Serialized form feeds the dispatch debug log.
impl Serialize for ProcedureArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProcedureArg::Null => serializer.serialize_none(),
            ProcedureArg::Text(s) => serializer.serialize_str(s),
            ProcedureArg::Integer(i) => serializer.serialize_i64(*i),
            ProcedureArg::Boolean(b) => serializer.serialize_bool(*b),
            ProcedureArg::Time(t) => serializer.collect_str(&t.format("%H:%M:%S")),
        }
    }
}

/// Input handed to an operation's rule set
#[derive(Debug, Clone, Default)]
pub struct OperationInput {
    /// Identifier taken from the URL path, when the route has one
    pub path_id: Option<String>,
    pub body: FieldMap,
}

impl OperationInput {
    pub fn new(path_id: Option<String>, body: FieldMap) -> Self {
        Self { path_id, body }
    }

    pub fn from_body(body: FieldMap) -> Self {
        Self { path_id: None, body }
    }

    pub fn from_path(path_id: impl Into<String>) -> Self {
        Self {
            path_id: Some(path_id.into()),
            body: FieldMap::new(),
        }
    }
}

/// Supported write operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddAirplane,
    AddAirport,
    AddPerson,
    GrantOrRevokePilotLicense,
    OfferFlight,
    FlightLanding,
    FlightTakeoff,
    PassengersBoard,
    PassengersDisembark,
    AssignPilot,
    RecycleCrew,
    RetireFlight,
    SimulationCycle,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::AddAirplane,
        Operation::AddAirport,
        Operation::AddPerson,
        Operation::GrantOrRevokePilotLicense,
        Operation::OfferFlight,
        Operation::FlightLanding,
        Operation::FlightTakeoff,
        Operation::PassengersBoard,
        Operation::PassengersDisembark,
        Operation::AssignPilot,
        Operation::RecycleCrew,
        Operation::RetireFlight,
        Operation::SimulationCycle,
    ];

    /// Name of the stored procedure this operation dispatches to
    pub fn procedure_name(&self) -> &'static str {
        match self {
            Operation::AddAirplane => "add_airplane",
            Operation::AddAirport => "add_airport",
            Operation::AddPerson => "add_person",
            Operation::GrantOrRevokePilotLicense => "grant_or_revoke_pilot_license",
            Operation::OfferFlight => "offer_flight",
            Operation::FlightLanding => "flight_landing",
            Operation::FlightTakeoff => "flight_takeoff",
            Operation::PassengersBoard => "passengers_board",
            Operation::PassengersDisembark => "passengers_disembark",
            Operation::AssignPilot => "assign_pilot",
            Operation::RecycleCrew => "recycle_crew",
            Operation::RetireFlight => "retire_flight",
            Operation::SimulationCycle => "simulation_cycle",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.procedure_name())
    }
}

/// Rule set turning raw input into positional procedure arguments
pub type RuleSet = fn(&OperationInput) -> ValidationResult<Vec<ProcedureArg>>;

/// Static description of one write operation
#[derive(Clone)]
pub struct OperationDescriptor {
    pub operation: Operation,
    pub procedure: &'static str,
    /// Declared parameter names of the procedure, in positional order
    pub parameters: &'static [&'static str],
    pub rules: RuleSet,
}

impl OperationDescriptor {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl std::fmt::Debug for OperationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("operation", &self.operation)
            .field("procedure", &self.procedure)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// A validated call, ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    pub procedure: &'static str,
    pub args: Vec<ProcedureArg>,
}

impl ProcedureCall {
    /// Arguments as a JSON array, for debug logs
    pub fn args_json(&self) -> String {
        serde_json::to_string(&self.args).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}
