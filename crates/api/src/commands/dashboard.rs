//! Dashboard commands

use std::sync::Arc;

use studyhall_domain::{DashboardSummary, Result};

use super::execute;
use crate::context::AppContext;

pub async fn dashboard_summary(ctx: &Arc<AppContext>) -> Result<DashboardSummary> {
    execute("dashboard::summary", ctx.dashboard.summary()).await
}

/// Delete every record the user owns. Irreversible on the backend.
pub async fn clear_all_data(ctx: &Arc<AppContext>) -> Result<()> {
    execute("dashboard::clear_all_data", ctx.dashboard.clear_all_data()).await
}
