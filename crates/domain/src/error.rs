//! Normalized API error surfaced to callers.

use serde_json::Value;
use thiserror::Error;

/// Fallback message when the server supplies none.
const GENERIC_MESSAGE: &str = "Request failed";

/// The one error shape callers of the client ever see.
///
/// `status` is the HTTP status code, or `None` for network-level failures.
/// `message` prefers a server-supplied message and falls back to a generic
/// transport error message. `data` carries the raw server error payload
/// when one was present. The type is cloneable so a single refresh failure
/// can fan out to every queued caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code, absent for network-level failures.
    pub status: Option<u16>,
    /// Human-readable description of the failure.
    pub message: String,
    /// Raw server error payload, when present.
    pub data: Option<Value>,
    /// Underlying cause, for transport failures.
    pub cause: Option<String>,
}

impl ApiError {
    /// Builds an error from an HTTP error response body.
    ///
    /// Prefers the server's `message` field, falling back to a status
    /// line when the body is not JSON or carries no message.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let data: Option<Value> = serde_json::from_slice(body).ok();
        let message = data
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map_or_else(
                || format!("{GENERIC_MESSAGE} with status {status}"),
                ToString::to_string,
            );
        Self {
            status: Some(status),
            message,
            data,
            cause: None,
        }
    }

    /// Builds a network-level error with no HTTP status.
    #[must_use]
    pub fn transport(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self {
            status: None,
            message: GENERIC_MESSAGE.to_string(),
            data: None,
            cause: Some(cause),
        }
    }

    /// Builds an error with an explicit message and no status.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            data: None,
            cause: None,
        }
    }

    /// Returns true if this error carries the given HTTP status.
    #[must_use]
    pub fn is_status(&self, status: u16) -> bool {
        self.status == Some(status)
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefers_server_message() {
        let body = br#"{"message":"Invalid credentials","code":"AUTH_001"}"#;
        let err = ApiError::from_response(401, body);
        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(err.status, Some(401));
        assert!(err.data.is_some());
    }

    #[test]
    fn test_falls_back_on_non_json_body() {
        let err = ApiError::from_response(502, b"Bad Gateway");
        assert_eq!(err.message, "Request failed with status 502");
        assert!(err.data.is_none());
    }

    #[test]
    fn test_falls_back_when_message_missing() {
        let err = ApiError::from_response(500, br#"{"error":"boom"}"#);
        assert_eq!(err.message, "Request failed with status 500");
        assert!(err.data.is_some());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = ApiError::transport("connection reset");
        assert_eq!(err.status, None);
        assert_eq!(err.cause.as_deref(), Some("connection reset"));
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_is_status() {
        assert!(ApiError::from_response(401, b"{}").is_status(401));
        assert!(!ApiError::transport("x").is_status(401));
    }
}
