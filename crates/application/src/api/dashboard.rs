//! Dashboard endpoints.

use fieldlink_domain::{ActivityEntry, ApiResult, DashboardStats, RequestSpec, ScheduleEntry};

use crate::client::ApiClient;

/// Dashboard data calls.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the headline statistics.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.client
            .fetch_json(RequestSpec::get("/engineer/dashboard/stats"))
            .await
    }

    /// Fetches the recent-activity feed.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn recent_activity(&self) -> ApiResult<Vec<ActivityEntry>> {
        self.client
            .fetch_json(RequestSpec::get("/engineer/dashboard/recent-activity"))
            .await
    }

    /// Fetches today's schedule, ordered by scheduled time.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn today_schedule(&self) -> ApiResult<Vec<ScheduleEntry>> {
        self.client
            .fetch_json(RequestSpec::get("/engineer/dashboard/today-schedule"))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::auth::TokenStore;
    use crate::test_support::{MemoryStorage, StubRefresher, StubTransport};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_stats_decodes_camel_case_payload() {
        let transport = Arc::new(StubTransport::new());
        transport.route(
            "GET",
            "/engineer/dashboard/stats",
            200,
            br#"{"todayAssignments":6,"completedToday":3,"pendingReports":2,"completionRate":97.0}"#,
        );
        let store = TokenStore::new(
            Arc::new(MemoryStorage::default()),
            Arc::new(MemoryStorage::default()),
        );
        let api = DashboardApi::new(ApiClient::new(
            transport,
            Arc::new(StubRefresher::succeeding("unused")),
            store,
        ));

        let stats = api.stats().await.unwrap();
        assert_eq!(stats.today_assignments, 6);
        assert_eq!(stats.completed_today, 3);
        assert_eq!(stats.completion_rate, Some(97.0));
    }
}
