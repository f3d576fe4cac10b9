//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification delivered to the engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: String,
    /// Short headline.
    pub title: String,
    /// Full notification text.
    pub message: String,
    /// Whether the engineer has opened it.
    #[serde(default)]
    pub read: bool,
    /// When it was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
