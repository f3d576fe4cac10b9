//! Payload models exchanged with the field-service backend.

mod assignment;
mod dashboard;
mod notification;
mod page;
mod profile;
mod report;

pub use assignment::{Assignment, AssignmentStatus};
pub use dashboard::{ActivityEntry, DashboardStats, ScheduleEntry};
pub use notification::Notification;
pub use page::Page;
pub use profile::UserProfile;
pub use report::{FieldReport, ReportStatus};
