//! Notification endpoints.

use fieldlink_domain::{ApiResult, Notification, Page, RequestSpec};

use crate::client::ApiClient;

/// Notification listing and read-state calls.
#[derive(Debug, Clone)]
pub struct NotificationsApi {
    client: ApiClient,
}

impl NotificationsApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches one page of notifications.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn list(&self, page: u32, limit: u32) -> ApiResult<Page<Notification>> {
        let request = RequestSpec::get("/engineer/notifications")
            .with_query("page", page.to_string())
            .with_query("limit", limit.to_string());
        self.client.fetch_json(request).await
    }

    /// Marks one notification as read.
    ///
    /// # Errors
    ///
    /// Fails when the notification does not exist or the call fails.
    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<()> {
        self.client
            .send(RequestSpec::put(format!(
                "/engineer/notifications/{notification_id}/read"
            )))
            .await?;
        Ok(())
    }

    /// Marks every notification as read.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.client
            .send(RequestSpec::put("/engineer/notifications/read-all"))
            .await?;
        Ok(())
    }
}
