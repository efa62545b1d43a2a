use crate::shared::error::AppResult;

use super::registry::OperationRegistry;
use super::types::{Operation, OperationDescriptor, OperationInput, ProcedureCall};

/// Request validator backed by the operation registry
pub struct DomainValidator {
    registry: OperationRegistry,
}

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self {
            registry: OperationRegistry::new(),
        }
    }

    /// Validate a request for the given operation, producing the procedure
    /// call to dispatch. Pure: the same input always yields the same result.
    pub fn validate_operation(
        &self,
        operation: Operation,
        input: &OperationInput,
    ) -> AppResult<ProcedureCall> {
        self.registry.validate(operation, input)
    }

    /// Get operation descriptor
    pub fn descriptor(&self, operation: Operation) -> Option<&OperationDescriptor> {
        self.registry.get(operation)
    }
}

impl Default for DomainValidator {
    fn default() -> Self {
        Self::new()
    }
}
