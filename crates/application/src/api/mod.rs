//! Typed endpoint wrappers over the authenticated client.
//!
//! One module per resource group, mirroring the backend's routes. All
//! calls go through [`crate::ApiClient::send`], so the authorization
//! retry behavior applies uniformly.

mod assignments;
mod auth;
mod dashboard;
mod location;
mod notifications;
mod profile;
mod reports;

pub use assignments::AssignmentsApi;
pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use location::{Coordinates, LocationApi};
pub use notifications::NotificationsApi;
pub use profile::ProfileApi;
pub use reports::{NewReport, ReportFilter, ReportsApi};
