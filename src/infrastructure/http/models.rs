//! HTTP models - Infrastructure concerns
//!
//! Shapes specific to the HTTP surface: the routed dispatch request and the
//! JSON bodies the handlers render.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldMap, Operation, OperationInput};

/// A routed write request, before validation
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub operation: Operation,
    pub input: OperationInput,
}

impl DispatchRequest {
    /// Operation whose arguments all come from the JSON body
    pub fn body(operation: Operation, body: FieldMap) -> Self {
        Self {
            operation,
            input: OperationInput::from_body(body),
        }
    }

    /// Operation addressed only by a URL identifier
    pub fn path(operation: Operation, id: String) -> Self {
        Self {
            operation,
            input: OperationInput::from_path(id),
        }
    }

    pub fn path_and_body(operation: Operation, id: String, body: FieldMap) -> Self {
        Self {
            operation,
            input: OperationInput::new(Some(id), body),
        }
    }

    /// Operation taking no input
    pub fn bare(operation: Operation) -> Self {
        Self {
            operation,
            input: OperationInput::default(),
        }
    }
}

/// Success body for write operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

/// Error body shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
