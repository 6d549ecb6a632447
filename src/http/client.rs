//! Thin HTTP transport over reqwest
//!
//! Responsibilities end at the wire: build the request, send it once, and
//! hand back status, headers, and body. Credential headers are assembled by
//! the API [`Client`](crate::client::Client), and error-envelope
//! classification happens there too. Transport-level failures (no HTTP
//! response received) surface as [`Error::Connection`].

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("centra-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A single HTTP exchange, as seen by the API client
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: String,
    /// `Request-Id` header, if the server sent one
    pub request_id: Option<String>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin HTTP transport
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: TransportConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Issue exactly one HTTP request and collect the response.
    ///
    /// `query` pairs are appended to the URL; `headers` are set verbatim;
    /// `body`, when present, is sent as JSON.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        headers: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let mut req = self.client.request(method.clone(), url);

        if !query.is_empty() {
            req = req.query(query);
        }
        for (key, value) in headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(Error::Connection)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let request_id = headers
            .get("request-id")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await.map_err(Error::Connection)?;

        debug!(%method, url, status, "request completed");

        Ok(ApiResponse {
            status,
            headers,
            body,
            request_id,
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
