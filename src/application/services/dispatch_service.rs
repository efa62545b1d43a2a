//! Validate-then-dispatch service for write operations

use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::validation::{DomainValidator, Operation, OperationInput, ProcedureCall},
    infrastructure::adapters::DatabaseGateway,
    shared::error::AppResult,
};

/// Runs an operation's rule set and, only if it passes, calls the procedure
pub struct DispatchService {
    validator: Arc<DomainValidator>,
    gateway: Arc<dyn DatabaseGateway>,
}

impl DispatchService {
    pub fn new(validator: Arc<DomainValidator>, gateway: Arc<dyn DatabaseGateway>) -> Self {
        Self { validator, gateway }
    }

    /// Validate and dispatch. A validation failure never reaches the gateway.
    pub async fn dispatch(&self, operation: Operation, input: &OperationInput) -> AppResult<ProcedureCall> {
        let call = self.validator.validate_operation(operation, input)?;

        debug!(procedure = %call.procedure, args = %call.args_json(), "Validated operation");

        self.gateway
            .execute_procedure(call.procedure, &call.args)
            .await?;

        Ok(call)
    }
}
