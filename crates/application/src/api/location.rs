//! Location service endpoints.

use fieldlink_domain::{ApiResult, RequestSpec};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;

/// A GPS position reported by the engineer's device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Location reporting and routing calls.
#[derive(Debug, Clone)]
pub struct LocationApi {
    client: ApiClient,
}

impl LocationApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Reports the engineer's current position.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn update(&self, coordinates: Coordinates) -> ApiResult<()> {
        let body = serde_json::to_value(coordinates)
            .map_err(|e| fieldlink_domain::ApiError::message(format!("Invalid coordinates: {e}")))?;
        self.client.post("/engineer/location", body).await?;
        Ok(())
    }

    /// Fetches directions to a destination address. The payload shape is
    /// provider-specific, so it is returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn directions(&self, destination: &str) -> ApiResult<Value> {
        let request =
            RequestSpec::get("/engineer/directions").with_query("destination", destination);
        self.client.fetch_json(request).await
    }
}
