//! Typed client for the dashboard summary

use std::sync::Arc;

use studyhall_domain::{DashboardSummary, Result};

use super::client::BackendClient;

/// `/api/dashboard` surface
#[derive(Debug)]
pub struct DashboardApi {
    client: Arc<BackendClient>,
}

impl DashboardApi {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        self.client.get("/api/dashboard/summary").await
    }

    /// Delete every record the user owns. Irreversible on the backend.
    pub async fn clear_all_data(&self) -> Result<()> {
        self.client.delete("/api/dashboard/data").await
    }
}
