//! FieldLink Domain - Core business types
//!
//! This crate defines the domain model for the FieldLink field-service
//! client. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod model;
pub mod request;
pub mod response;

pub use auth::{CredentialPair, StorageScope};
pub use error::{ApiError, ApiResult};
pub use model::{
    ActivityEntry, Assignment, AssignmentStatus, DashboardStats, FieldReport, Notification, Page,
    ReportStatus, ScheduleEntry, UserProfile,
};
pub use request::{HttpMethod, RequestSpec};
pub use response::ResponseSpec;
