//! Dashboard types

use serde::{Deserialize, Serialize};

/// Aggregated counters shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_classes: u32,
    pub pending_homework: u32,
    pub due_today: u32,
    pub overdue: u32,
    pub completed_this_week: u32,
}
