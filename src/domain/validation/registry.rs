use std::collections::HashMap;

use crate::shared::error::{AppError, AppResult};

use super::operations::{
    airplanes::register_airplanes, airports::register_airports, flights::register_flights,
    people::register_people, simulation::register_simulation,
};
use super::types::{Operation, OperationDescriptor, OperationInput, ProcedureCall};

/// Immutable table of operation descriptors, built once at startup
pub struct OperationRegistry {
    pub(crate) operations: HashMap<Operation, OperationDescriptor>,
}

impl OperationRegistry {
    /// Create a registry with every supported operation
    pub fn new() -> Self {
        let mut registry = Self {
            operations: HashMap::new(),
        };

        registry.register_default_operations();

        registry
    }

    /// Register an operation descriptor
    pub fn register(&mut self, descriptor: OperationDescriptor) {
        self.operations.insert(descriptor.operation, descriptor);
    }

    pub fn get(&self, operation: Operation) -> Option<&OperationDescriptor> {
        self.operations.get(&operation)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Run the operation's rule set and check the result against the
    /// procedure's declared signature.
    pub fn validate(&self, operation: Operation, input: &OperationInput) -> AppResult<ProcedureCall> {
        let descriptor = self.operations.get(&operation).ok_or_else(|| {
            AppError::Internal(format!("No descriptor registered for operation {}", operation))
        })?;

        let args = (descriptor.rules)(input)?;

        if args.len() != descriptor.arity() {
            return Err(AppError::Internal(format!(
                "Rule set for {} produced {} arguments, procedure declares {}",
                descriptor.procedure,
                args.len(),
                descriptor.arity()
            )));
        }

        Ok(ProcedureCall {
            procedure: descriptor.procedure,
            args,
        })
    }

    fn register_default_operations(&mut self) {
        register_airplanes(self);
        register_airports(self);
        register_people(self);
        register_flights(self);
        register_simulation(self);
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
