//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest
//! library. It resolves request paths against a configured base URL and
//! enforces a single fixed per-request timeout; every received HTTP
//! response is returned as-is, whatever its status.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fieldlink_application::{HttpTransport, TransportError};
use fieldlink_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method};
use url::Url;

/// Default per-request timeout, matching the original client's budget.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// HTTP transport over `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport against the given base URL.
    ///
    /// Default configuration:
    /// - Per-request timeout: 15 seconds
    /// - Follow redirects: up to 10
    /// - User-Agent: "FieldLink/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the client
    /// cannot be created.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {base_url}")))?;
        let client = Client::builder()
            .user_agent(concat!("FieldLink/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Resolves a request against the base URL, appending query pairs.
    fn build_url(&self, request: &RequestSpec) -> Result<Url, TransportError> {
        let mut url = self
            .base_url
            .join(&request.path)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.path)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Maps reqwest errors to the transport error taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return TransportError::DnsError {
                    host: error
                        .url()
                        .and_then(|u| u.host_str())
                        .unwrap_or("unknown")
                        .to_string(),
                    message,
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
        let url = self.build_url(request)?;
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::BodyRead(e.to_string()))?
            .to_vec();

        tracing::trace!(
            method = %request.method,
            path = %request.path,
            status,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "request completed"
        );

        Ok(ResponseSpec::new(status, headers, body, start.elapsed()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Put),
            Method::PUT
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ReqwestTransport::new("not a url");
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_url_joins_path_and_query() {
        let transport = ReqwestTransport::new("http://localhost:5000").unwrap();
        let request = RequestSpec::get("/engineer/assignments")
            .with_query("status", "pending")
            .with_query("page", "2");
        let url = transport.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/engineer/assignments?status=pending&page=2"
        );
    }

    #[test]
    fn test_build_url_without_query_keeps_path_clean() {
        let transport = ReqwestTransport::new("http://localhost:5000").unwrap();
        let url = transport
            .build_url(&RequestSpec::get("/engineer/profile"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/engineer/profile");
    }
}
