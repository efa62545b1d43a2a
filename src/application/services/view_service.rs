//! Read-only access to the allow-listed views

use std::sync::Arc;

use crate::{
    domain::ViewName,
    infrastructure::adapters::{DatabaseGateway, ViewRow},
    shared::error::AppResult,
};

pub struct ViewService {
    gateway: Arc<dyn DatabaseGateway>,
}

impl ViewService {
    pub fn new(gateway: Arc<dyn DatabaseGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve the requested name against the allow-list, then read every row.
    /// Unknown names fail before any database access.
    pub async fn read(&self, name: &str) -> AppResult<(ViewName, Vec<ViewRow>)> {
        let view: ViewName = name.parse()?;
        let rows = self.gateway.query_view(view).await?;
        Ok((view, rows))
    }
}
