//! Common test utilities and mock implementations
//!
//! An in-memory database gateway that records every call it receives.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ProcedureArg, ViewName},
    infrastructure::adapters::{DatabaseGateway, ViewRow},
    shared::error::{AppError, AppResult},
};

/// Procedure name and the arguments it was called with
pub type RecordedCall = (String, Vec<ProcedureArg>);

/// Mock database gateway for testing
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    view_reads: Mutex<Vec<ViewName>>,
    rows: Vec<ViewRow>,
    failure: Option<String>,
    ping_failure: Option<String>,
}

impl RecordingGateway {
    /// A gateway where every call succeeds
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            view_reads: Mutex::new(Vec::new()),
            rows: Vec::new(),
            failure: None,
            ping_failure: None,
        }
    }

    /// A gateway whose procedure calls and view reads fail with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// A gateway whose ping fails with `message`
    pub fn unreachable(message: &str) -> Self {
        Self {
            ping_failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Rows returned by every view read
    pub fn with_rows(mut self, rows: Vec<ViewRow>) -> Self {
        self.rows = rows;
        self
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn view_reads(&self) -> Vec<ViewName> {
        self.view_reads.lock().await.clone()
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseGateway for RecordingGateway {
    async fn execute_procedure(&self, procedure: &str, args: &[ProcedureArg]) -> AppResult<()> {
        self.calls
            .lock()
            .await
            .push((procedure.to_string(), args.to_vec()));

        match &self.failure {
            Some(message) => Err(AppError::Downstream(message.clone())),
            None => Ok(()),
        }
    }

    async fn query_view(&self, view: ViewName) -> AppResult<Vec<ViewRow>> {
        self.view_reads.lock().await.push(view);

        match &self.failure {
            Some(message) => Err(AppError::Downstream(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        match &self.ping_failure {
            Some(message) => Err(AppError::Downstream(message.clone())),
            None => Ok(()),
        }
    }
}
