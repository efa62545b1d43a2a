//! Domain layer - Core business logic and domain models
//!
//! Request validation rules, the view allow-list and the health model.
//! Nothing in here performs I/O.

pub mod validation;
pub mod views;
pub mod health;

pub use validation::{
    DomainValidator, Operation, OperationDescriptor, OperationInput, OperationRegistry,
    ProcedureArg, ProcedureCall, ValidationError,
};
pub use views::ViewName;
pub use health::{HealthStatus, HealthResponse};
