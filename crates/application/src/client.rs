//! Authenticated request client.
//!
//! Issues outbound requests carrying the current access token and
//! recovers from exactly one class of failure: an authorization
//! rejection (HTTP 401). On a 401 with a stored refresh token, the
//! client refreshes the token and retries the original request once.
//! Concurrent failures coalesce into a single refresh network call; the
//! requests that lose the race queue on the in-flight refresh and retry
//! with the token it delivers.

use std::sync::Arc;

use fieldlink_domain::{ApiError, ApiResult, RequestSpec, ResponseSpec};
use serde::de::DeserializeOwned;
use tokio::sync::{oneshot, Mutex};

use crate::auth::{RefreshEndpoint, TokenStore};
use crate::ports::HttpTransport;

/// Gate serializing refresh attempts.
///
/// While a refresh is in flight the gate holds the queue of suspended
/// callers. The queue is created empty when the refresh starts, drained
/// FIFO the instant the refresh settles, and the gate returns to `Idle`
/// on both the success and the failure path.
enum RefreshGate {
    Idle,
    Refreshing {
        waiters: Vec<oneshot::Sender<ApiResult<String>>>,
    },
}

/// HTTP client with transparent single-flight token refresh.
///
/// Owns its refresh state; construct one per application session and
/// clone it freely (clones share the same gate and token store).
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    refresher: Arc<dyn RefreshEndpoint>,
    store: TokenStore,
    gate: Arc<Mutex<RefreshGate>>,
}

impl ApiClient {
    /// Creates a client over the given transport, refresher, and store.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        refresher: Arc<dyn RefreshEndpoint>,
        store: TokenStore,
    ) -> Self {
        Self {
            transport,
            refresher,
            store,
            gate: Arc::new(Mutex::new(RefreshGate::Idle)),
        }
    }

    /// The token store this client reads and mutates.
    #[must_use]
    pub const fn token_store(&self) -> &TokenStore {
        &self.store
    }

    /// Sends a request, attaching the stored access token and recovering
    /// from a single authorization rejection.
    ///
    /// # Errors
    ///
    /// Fails with a normalized [`ApiError`] on any transport failure, any
    /// non-2xx status other than a recoverable 401, a 401 with no stored
    /// refresh token, a failed refresh exchange, or a second 401 after a
    /// successful refresh.
    pub async fn send(&self, request: RequestSpec) -> ApiResult<ResponseSpec> {
        let mut refreshed: Option<String> = None;

        loop {
            let mut attempt = request.clone();
            let token = refreshed.clone().or_else(|| self.store.access_token());
            if let Some(token) = token {
                attempt = attempt.with_header("Authorization", format!("Bearer {token}"));
            }

            let response = self
                .transport
                .execute(&attempt)
                .await
                .map_err(ApiError::from)?;

            if response.is_success() {
                return Ok(response);
            }

            // Retry at most once; a 401 on the retried request surfaces
            // as-is so a misbehaving server cannot loop us.
            if response.is_unauthorized()
                && refreshed.is_none()
                && self.store.refresh_token().is_some()
            {
                refreshed = Some(self.refreshed_token().await?);
                continue;
            }

            return Err(ApiError::from_response(response.status, &response.body));
        }
    }

    /// Sends a request and decodes the successful response body as JSON.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::send`] does, or when the body does not decode.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: RequestSpec) -> ApiResult<T> {
        self.send(request).await?.json()
    }

    /// Obtains a fresh access token, coalescing with any refresh already
    /// in flight.
    ///
    /// Every caller, the one that starts the refresh included, waits on a
    /// oneshot; the exchange itself runs in a detached task. A caller
    /// whose future is dropped mid-wait (timeout, `select!`) therefore
    /// cannot strand the gate: the task settles it regardless.
    async fn refreshed_token(&self) -> ApiResult<String> {
        let receiver = {
            let mut gate = self.gate.lock().await;
            match &mut *gate {
                RefreshGate::Refreshing { waiters } => {
                    tracing::debug!("refresh already in flight, queueing");
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    rx
                }
                RefreshGate::Idle => {
                    tracing::debug!("access token rejected, starting refresh");
                    let (tx, rx) = oneshot::channel();
                    *gate = RefreshGate::Refreshing { waiters: vec![tx] };
                    let client = self.clone();
                    tokio::spawn(async move { client.run_refresh().await });
                    rx
                }
            }
        };

        receiver
            .await
            .map_err(|_| ApiError::message("Refresh settled without an outcome"))?
    }

    /// Performs the refresh exchange and settles the gate: stores or
    /// purges credentials, resets the gate to idle, and drains the
    /// waiter queue FIFO, on both the success and the failure branch.
    ///
    /// The gate mutex is only ever held to settle the state, never
    /// across the refresh network call itself.
    async fn run_refresh(&self) {
        let outcome = match self.store.refresh_token() {
            Some(refresh_token) => self.refresher.refresh_access_token(&refresh_token).await,
            // Unreachable from send(), which checks for a refresh token
            // before entering the gate.
            None => Err(ApiError::message("No refresh token")),
        };

        match &outcome {
            Ok(token) => {
                self.store.store_refreshed_access_token(token);
                tracing::debug!("token refresh succeeded");
            }
            Err(error) => {
                self.store.clear_auth();
                tracing::warn!(%error, "token refresh failed, credentials purged");
            }
        }

        let waiters = {
            let mut gate = self.gate.lock().await;
            match std::mem::replace(&mut *gate, RefreshGate::Idle) {
                RefreshGate::Refreshing { waiters } => waiters,
                RefreshGate::Idle => Vec::new(),
            }
        };
        for waiter in waiters {
            // A closed receiver means that caller abandoned its request;
            // draining continues for the rest.
            let _ = waiter.send(outcome.clone());
        }
    }

    /// Sends a GET request to `path`.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::send`] does.
    pub async fn get(&self, path: impl Into<String>) -> ApiResult<ResponseSpec> {
        self.send(RequestSpec::get(path)).await
    }

    /// Sends a POST request to `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::send`] does.
    pub async fn post(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> ApiResult<ResponseSpec> {
        self.send(RequestSpec::post(path).with_json(body)).await
    }

    /// Sends a PUT request to `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::send`] does.
    pub async fn put(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> ApiResult<ResponseSpec> {
        self.send(RequestSpec::put(path).with_json(body)).await
    }

    /// Sends a DELETE request to `path`.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::send`] does.
    pub async fn delete(&self, path: impl Into<String>) -> ApiResult<ResponseSpec> {
        self.send(RequestSpec::delete(path)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
