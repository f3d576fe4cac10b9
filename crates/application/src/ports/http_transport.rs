//! HTTP transport port

use async_trait::async_trait;
use fieldlink_domain::{ApiError, RequestSpec, ResponseSpec};
use thiserror::Error;

/// Errors raised by the transport when no HTTP response was received.
///
/// HTTP responses with error statuses are *not* transport errors; the
/// transport hands every received response back to the caller and lets
/// the client decide what to do with the status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout budget that was exceeded.
        timeout_ms: u64,
    },

    /// The host could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::transport(error.to_string())
    }
}

/// Port for executing HTTP requests.
///
/// Implementations resolve the request path against their configured
/// base URL and enforce a single fixed per-request timeout. They must
/// not retry or reinterpret responses; recovery policy belongs to the
/// client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes a request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was received.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError>;
}
