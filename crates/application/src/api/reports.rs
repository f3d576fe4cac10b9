//! Field service report endpoints.

use fieldlink_domain::{ApiResult, FieldReport, RequestSpec};
use serde::Serialize;

use crate::client::ApiClient;

/// Payload for creating or updating a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReport {
    /// The assignment the report covers.
    pub assignment_id: String,
    /// Description of the work performed.
    pub work_performed: String,
    /// Parts consumed during the job.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts_used: Vec<String>,
    /// Engineer's closing remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Filters for the report listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Restrict to one lifecycle status.
    pub status: Option<String>,
    /// Restrict to one assignment.
    pub assignment_id: Option<String>,
}

impl ReportFilter {
    fn apply(&self, mut request: RequestSpec) -> RequestSpec {
        if let Some(status) = &self.status {
            request = request.with_query("status", status);
        }
        if let Some(assignment_id) = &self.assignment_id {
            request = request.with_query("assignment_id", assignment_id);
        }
        request
    }
}

/// Report submission and listing calls.
#[derive(Debug, Clone)]
pub struct ReportsApi {
    client: ApiClient,
}

impl ReportsApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Files a new report.
    ///
    /// # Errors
    ///
    /// Fails when the payload is rejected or the call fails.
    pub async fn create(&self, report: &NewReport) -> ApiResult<FieldReport> {
        let body = serde_json::to_value(report)
            .map_err(|e| fieldlink_domain::ApiError::message(format!("Invalid report: {e}")))?;
        let request = RequestSpec::post("/engineer/field-reports").with_json(body);
        self.client.fetch_json(request).await
    }

    /// Updates an existing report.
    ///
    /// # Errors
    ///
    /// Fails when the report does not exist or is not editable.
    pub async fn update(&self, report_id: &str, report: &NewReport) -> ApiResult<FieldReport> {
        let body = serde_json::to_value(report)
            .map_err(|e| fieldlink_domain::ApiError::message(format!("Invalid report: {e}")))?;
        let request =
            RequestSpec::put(format!("/engineer/field-reports/{report_id}")).with_json(body);
        self.client.fetch_json(request).await
    }

    /// Lists reports matching the filter.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn list(&self, filter: &ReportFilter) -> ApiResult<Vec<FieldReport>> {
        let request = filter.apply(RequestSpec::get("/engineer/field-reports"));
        self.client.fetch_json(request).await
    }

    /// Fetches one report with full details.
    ///
    /// # Errors
    ///
    /// Fails when the report does not exist or the call fails.
    pub async fn details(&self, report_id: &str) -> ApiResult<FieldReport> {
        self.client
            .fetch_json(RequestSpec::get(format!("/engineer/field-reports/{report_id}")))
            .await
    }
}
