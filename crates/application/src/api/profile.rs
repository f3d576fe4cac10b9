//! Engineer profile endpoints.

use fieldlink_domain::{ApiResult, RequestSpec, UserProfile};

use crate::client::ApiClient;

/// Profile fetch and update calls.
#[derive(Debug, Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the logged-in engineer's profile.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn get(&self) -> ApiResult<UserProfile> {
        self.client
            .fetch_json(RequestSpec::get("/engineer/profile"))
            .await
    }

    /// Updates the profile and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Fails when the payload is rejected or the call fails.
    pub async fn update(&self, profile: &UserProfile) -> ApiResult<UserProfile> {
        let body = serde_json::to_value(profile)
            .map_err(|e| fieldlink_domain::ApiError::message(format!("Invalid profile: {e}")))?;
        let request = RequestSpec::put("/engineer/profile").with_json(body);
        self.client.fetch_json(request).await
    }
}
