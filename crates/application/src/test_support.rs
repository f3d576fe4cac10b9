//! Shared test doubles for the application crate's unit tests.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::new_without_default,
    missing_docs
)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fieldlink_domain::{ApiError, ApiResult, RequestSpec, ResponseSpec};

use crate::auth::RefreshEndpoint;
use crate::ports::{CredentialStorage, HttpTransport, TransportError};

/// In-memory key/value backend, one per storage scope under test.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl CredentialStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Scripted transport.
///
/// When an accepted token is configured, any request whose bearer token
/// does not match gets a 401, mimicking an expired access token. Routed
/// responses are keyed by `"METHOD path"`; unrouted requests get
/// `200 {"success":true}`. Every request is recorded for assertions.
pub struct StubTransport {
    accepted_token: Mutex<Option<String>>,
    routes: Mutex<HashMap<String, (u16, Vec<u8>)>>,
    requests: Mutex<Vec<RequestSpec>>,
    delay: Duration,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            accepted_token: Mutex::new(None),
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Transport that rejects every bearer token except `token` with 401.
    pub fn requiring_token(token: &str) -> Self {
        let transport = Self::new();
        transport.accept_token(token);
        transport
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn accept_token(&self, token: &str) {
        *self.accepted_token.lock().unwrap() = Some(token.to_string());
    }

    pub fn route(&self, method: &str, path: &str, status: u16, body: &[u8]) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), (status, body.to_vec()));
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }

    /// Bearer tokens seen on recorded requests, in arrival order.
    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.requests()
            .iter()
            .map(|r| {
                r.header("Authorization")
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .map(ToString::to_string)
            })
            .collect()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.requests.lock().unwrap().push(request.clone());

        let expected = self.accepted_token.lock().unwrap().clone();
        if let Some(expected) = expected {
            let authorized = request.header("Authorization")
                == Some(format!("Bearer {expected}").as_str());
            if !authorized {
                return Ok(ResponseSpec::new(
                    401,
                    HashMap::new(),
                    br#"{"message":"Token expired"}"#.to_vec(),
                    Duration::ZERO,
                ));
            }
        }

        let key = format!("{} {}", request.method, request.path);
        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or((200, br#"{"success":true}"#.to_vec()));
        Ok(ResponseSpec::new(status, HashMap::new(), body, Duration::ZERO))
    }
}

/// Refresh endpoint double that counts calls and settles with a fixed
/// outcome after an optional delay. On success it can update a linked
/// transport's accepted token, playing the part of the real backend
/// rotating the access token.
pub struct StubRefresher {
    outcome: ApiResult<String>,
    calls: AtomicUsize,
    delay: Duration,
    backend: Option<Arc<StubTransport>>,
}

impl StubRefresher {
    pub fn succeeding(token: &str) -> Self {
        Self {
            outcome: Ok(token.to_string()),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            backend: None,
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            backend: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Links a transport that starts accepting the refreshed token once
    /// the refresh settles successfully.
    pub fn rotating(mut self, backend: Arc<StubTransport>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefreshEndpoint for StubRefresher {
    async fn refresh_access_token(&self, _refresh_token: &str) -> ApiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let (Ok(token), Some(backend)) = (&self.outcome, &self.backend) {
            backend.accept_token(token);
        }
        self.outcome.clone()
    }
}
