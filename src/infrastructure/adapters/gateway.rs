//! Database gateway port
//!
//! The application layer talks to the database only through this trait, so
//! handlers receive an injected `Arc<dyn DatabaseGateway>` instead of a
//! global connection.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{ProcedureArg, ViewName};
use crate::shared::error::AppResult;

/// One view row: column name to JSON value, temporal columns as strings
pub type ViewRow = Map<String, Value>;

#[async_trait]
pub trait DatabaseGateway: Send + Sync {
    /// Call a stored procedure with positional arguments inside a single
    /// transaction. Commits on success and rolls back on failure.
    async fn execute_procedure(&self, procedure: &str, args: &[ProcedureArg]) -> AppResult<()>;

    /// Read every row of an allow-listed view
    async fn query_view(&self, view: ViewName) -> AppResult<Vec<ViewRow>>;

    /// Trivial round trip to check reachability
    async fn ping(&self) -> AppResult<()>;
}
