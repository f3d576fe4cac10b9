//! Work assignment endpoints.

use fieldlink_domain::{ApiResult, Assignment, AssignmentStatus, RequestSpec};
use serde_json::json;

use crate::client::ApiClient;

/// Assignment listing and lifecycle calls.
#[derive(Debug, Clone)]
pub struct AssignmentsApi {
    client: ApiClient,
}

impl AssignmentsApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists assignments, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn list(&self, status: Option<AssignmentStatus>) -> ApiResult<Vec<Assignment>> {
        let filter = status.map_or("all", AssignmentStatus::as_str);
        let request = RequestSpec::get("/engineer/assignments").with_query("status", filter);
        self.client.fetch_json(request).await
    }

    /// Fetches one assignment with full details.
    ///
    /// # Errors
    ///
    /// Fails when the assignment does not exist or the call fails.
    pub async fn details(&self, assignment_id: &str) -> ApiResult<Assignment> {
        self.client
            .fetch_json(RequestSpec::get(format!(
                "/engineer/assignments/{assignment_id}"
            )))
            .await
    }

    /// Accepts a pending assignment.
    ///
    /// # Errors
    ///
    /// Fails when the assignment cannot be accepted or the call fails.
    pub async fn accept(&self, assignment_id: &str) -> ApiResult<Assignment> {
        let request = RequestSpec::post(format!("/engineer/assignments/{assignment_id}/accept"));
        self.client.fetch_json(request).await
    }

    /// Marks work as started, reporting the engineer's location.
    ///
    /// # Errors
    ///
    /// Fails when the assignment is not in an acceptable state.
    pub async fn start(&self, assignment_id: &str, location: &str) -> ApiResult<Assignment> {
        let request = RequestSpec::post(format!("/engineer/assignments/{assignment_id}/start"))
            .with_json(json!({ "location": location }));
        self.client.fetch_json(request).await
    }

    /// Marks work as completed with a free-form completion payload.
    ///
    /// # Errors
    ///
    /// Fails when the assignment is not in progress or the call fails.
    pub async fn complete(
        &self,
        assignment_id: &str,
        completion: serde_json::Value,
    ) -> ApiResult<Assignment> {
        let request = RequestSpec::post(format!("/engineer/assignments/{assignment_id}/complete"))
            .with_json(completion);
        self.client.fetch_json(request).await
    }

    /// Sets an assignment's status directly.
    ///
    /// # Errors
    ///
    /// Fails when the transition is not allowed or the call fails.
    pub async fn update_status(
        &self,
        assignment_id: &str,
        status: AssignmentStatus,
    ) -> ApiResult<Assignment> {
        let request = RequestSpec::put(format!("/engineer/assignments/{assignment_id}/status"))
            .with_json(json!({ "status": status.as_str() }));
        self.client.fetch_json(request).await
    }
}
