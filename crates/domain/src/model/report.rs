//! Field service report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a field service report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Saved but not yet submitted.
    Draft,
    /// Submitted for review.
    Submitted,
    /// Accepted by the back office.
    Approved,
    /// Sent back for corrections.
    Rejected,
}

/// A field service report filed against an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Server-assigned identifier, e.g. `FSR001`.
    pub id: String,
    /// The assignment this report covers.
    pub assignment_id: String,
    /// Current lifecycle status.
    pub status: ReportStatus,
    /// Description of the work performed.
    pub work_performed: String,
    /// Parts consumed during the job.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts_used: Vec<String>,
    /// Engineer's closing remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// When the report was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
