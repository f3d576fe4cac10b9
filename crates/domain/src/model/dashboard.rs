//! Dashboard models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assignment::Assignment;

/// Headline numbers for the engineer's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Assignments scheduled for today.
    pub today_assignments: u32,
    /// Assignments completed so far today.
    pub completed_today: u32,
    /// Reports awaiting submission.
    pub pending_reports: u32,
    /// Completion rate percentage over the reporting window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<f64>,
}

/// One entry in today's schedule. The backend returns full assignments
/// here, ordered by scheduled time.
pub type ScheduleEntry = Assignment;

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Server-assigned identifier.
    pub id: String,
    /// Activity kind, e.g. `completed`, `accepted`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description.
    pub description: String,
    /// When the activity happened.
    pub timestamp: DateTime<Utc>,
}
