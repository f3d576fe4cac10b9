//! Work assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a work assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Offered to the engineer, not yet accepted.
    Pending,
    /// Accepted but work has not started.
    Accepted,
    /// Work is underway.
    InProgress,
    /// Work finished.
    Completed,
    /// Withdrawn by the dispatcher.
    Cancelled,
}

impl AssignmentStatus {
    /// The status as the backend's query-filter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A work assignment dispatched to an engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Server-assigned identifier, e.g. `ASG001`.
    pub id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Job category, e.g. "Preventive Maintenance".
    #[serde(rename = "type")]
    pub job_type: String,
    /// Current lifecycle status.
    pub status: AssignmentStatus,
    /// Dispatcher-assigned priority: `low`, `medium`, or `high`.
    pub priority: String,
    /// Site address.
    pub location: String,
    /// What the job entails.
    #[serde(default)]
    pub description: String,
    /// When the visit is scheduled to begin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,
    /// Equipment the job concerns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_details: Option<String>,
    /// Site access notes and safety requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}
