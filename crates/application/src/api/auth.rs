//! Authentication endpoints.

use fieldlink_domain::{ApiResult, CredentialPair, RequestSpec};
use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;

/// Login, logout, and password recovery calls.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Wraps the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Logs in and stores the returned credential pair in the scope
    /// selected by `remember`.
    ///
    /// # Errors
    ///
    /// Fails when the credentials are rejected or the call fails.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> ApiResult<CredentialPair> {
        let request = RequestSpec::post("/api/auth/login")
            .with_json(json!({ "email": email, "password": password }));
        let pair: CredentialPair = self.client.fetch_json(request).await?;
        self.client.token_store().set_auth(&pair, remember);
        Ok(pair)
    }

    /// Logs out: tells the server best-effort, then purges stored
    /// credentials unconditionally.
    pub async fn logout(&self) {
        // The server call may fail (expired session, offline); local
        // credentials are cleared either way.
        if let Err(error) = self.client.post("/api/auth/logout", json!({})).await {
            tracing::debug!(%error, "server logout failed, clearing locally");
        }
        self.client.token_store().clear_auth();
    }

    /// Changes the password of the logged-in engineer.
    ///
    /// # Errors
    ///
    /// Fails when the current password is rejected or the call fails.
    pub async fn change_password(&self, current: &str, new: &str) -> ApiResult<()> {
        self.client
            .post(
                "/api/auth/change-password",
                json!({ "currentPassword": current, "newPassword": new }),
            )
            .await?;
        Ok(())
    }

    /// Requests a one-time password for account recovery.
    ///
    /// # Errors
    ///
    /// Fails when the email is unknown or the call fails.
    pub async fn request_otp(&self, email: &str) -> ApiResult<()> {
        self.client
            .post(
                "/api/auth/forgot-password/request-otp",
                json!({ "email": email }),
            )
            .await?;
        Ok(())
    }

    /// Verifies a one-time password and returns a reset token.
    ///
    /// # Errors
    ///
    /// Fails when the code is wrong or expired.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct VerifyResponse {
            reset_token: String,
        }

        let request = RequestSpec::post("/api/auth/forgot-password/verify-otp")
            .with_json(json!({ "email": email, "otp": otp }));
        let payload: VerifyResponse = self.client.fetch_json(request).await?;
        Ok(payload.reset_token)
    }

    /// Sets a new password using a reset token from [`Self::verify_otp`].
    ///
    /// # Errors
    ///
    /// Fails when the reset token is invalid or expired.
    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> ApiResult<()> {
        self.client
            .post(
                "/api/auth/forgot-password/reset",
                json!({ "resetToken": reset_token, "newPassword": new_password }),
            )
            .await?;
        Ok(())
    }
}
