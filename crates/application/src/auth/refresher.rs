//! Refresh endpoint caller.
//!
//! Exchanges a refresh token for a new access token via a single network
//! call. The exchange goes straight through the transport, never through
//! the retrying client: a refresh call must not trigger another refresh.

use std::sync::Arc;

use async_trait::async_trait;
use fieldlink_domain::{ApiError, ApiResult, RequestSpec};
use serde::Deserialize;
use serde_json::json;

use crate::ports::HttpTransport;

/// Path of the token refresh endpoint.
const REFRESH_PATH: &str = "/api/auth/refresh";

/// Port for exchanging a refresh token for a new access token.
#[async_trait]
pub trait RefreshEndpoint: Send + Sync {
    /// Performs the exchange and returns the new access token.
    ///
    /// # Errors
    ///
    /// Fails when the remote exchange is rejected or the response does
    /// not carry an access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> ApiResult<String>;
}

/// Payload returned by the refresh endpoint. Only the access token comes
/// back; the refresh token stays unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
}

/// Production refresh caller over the HTTP transport.
pub struct HttpRefresher {
    transport: Arc<dyn HttpTransport>,
}

impl HttpRefresher {
    /// Creates a refresher over the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl RefreshEndpoint for HttpRefresher {
    async fn refresh_access_token(&self, refresh_token: &str) -> ApiResult<String> {
        let request =
            RequestSpec::post(REFRESH_PATH).with_json(json!({ "refreshToken": refresh_token }));

        let response = self
            .transport
            .execute(&request)
            .await
            .map_err(ApiError::from)?;

        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &response.body));
        }

        let payload: RefreshResponse = response.json()?;
        Ok(payload.access_token)
    }
}
