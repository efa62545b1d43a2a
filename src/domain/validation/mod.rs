//! Domain validation module
//!
//! Primitive field validators, the per-operation rule sets built from them,
//! and the registry that maps each operation to its stored procedure.

pub mod types;
pub mod primitives;
pub mod registry;
pub mod domain_validator;
pub mod operations;

pub use types::{
    FieldMap,
    Operation,
    OperationDescriptor,
    OperationInput,
    ProcedureArg,
    ProcedureCall,
    ValidationError,
    ValidationResult,
};
pub use registry::OperationRegistry;
pub use domain_validator::DomainValidator;
