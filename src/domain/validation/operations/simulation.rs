use crate::domain::validation::registry::OperationRegistry;
use crate::domain::validation::types::{
    Operation, OperationDescriptor, OperationInput, ProcedureArg, ValidationResult,
};

pub fn register_simulation(registry: &mut OperationRegistry) {
    registry.register(OperationDescriptor {
        operation: Operation::SimulationCycle,
        procedure: "simulation_cycle",
        parameters: &[],
        rules: simulation_cycle,
    });
}

/// Advances the simulation; takes no input
pub fn simulation_cycle(_input: &OperationInput) -> ValidationResult<Vec<ProcedureArg>> {
    Ok(Vec::new())
}
