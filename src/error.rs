//! Error types for the Centra client
//!
//! This module defines the error taxonomy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Operation failures are surfaced immediately to the caller; nothing is
//! retried or swallowed inside this layer. Each API-originated error carries
//! the HTTP status, the server-provided `type`/`code`/`param`/`message`, and
//! the `Request-Id` response header so callers can act without inspecting
//! transport internals.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the Centra client
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing request parameters (HTTP 400-class)
    #[error("Invalid request: {0}")]
    InvalidRequest(ErrorDetails),

    /// Bad or missing credentials (HTTP 401), or no API key configured
    #[error("Authentication failed: {0}")]
    Authentication(ErrorDetails),

    /// The key is valid but not allowed to perform this operation (HTTP 403)
    #[error("Permission denied: {0}")]
    PermissionDenied(ErrorDetails),

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(ErrorDetails),

    /// Too many requests (HTTP 429)
    #[error("Rate limited: {0}")]
    RateLimited(ErrorDetails),

    /// Server-side failure (HTTP 5xx) or a malformed server response
    #[error("API error: {0}")]
    Api(ErrorDetails),

    /// Transport-level failure, no HTTP response was received
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Webhook payload signature did not match (local computation)
    #[error("Signature verification failed: {message}")]
    SignatureVerification {
        /// What went wrong while checking the signature
        message: String,
    },

    /// Failed to parse a JSON body
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Structured details attached to every API-originated error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetails {
    /// HTTP status code, `None` for errors raised locally
    pub status: Option<u16>,
    /// Server-reported error type (e.g. `invalid_request_error`)
    pub error_type: Option<String>,
    /// Server-reported error code (e.g. `resource_missing`)
    pub code: Option<String>,
    /// The request parameter the error relates to, if any
    pub param: Option<String>,
    /// Human-readable message
    pub message: Option<String>,
    /// `Request-Id` header of the response that produced the error
    pub request_id: Option<String>,
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message.as_deref().unwrap_or("(no message)"))?;
        if let Some(status) = self.status {
            write!(f, " (status {status})")?;
        }
        if let Some(code) = &self.code {
            write!(f, " (code {code})")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request-id {request_id})")?;
        }
        Ok(())
    }
}

/// Wire shape of the error envelope: `{"error": {...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
    code: Option<String>,
    param: Option<String>,
}

impl Error {
    /// Create a local invalid-request error (no HTTP call was made)
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(ErrorDetails {
            message: Some(message.into()),
            ..ErrorDetails::default()
        })
    }

    /// Create a local authentication error (no HTTP call was made)
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(ErrorDetails {
            message: Some(message.into()),
            ..ErrorDetails::default()
        })
    }

    /// Classify a non-2xx response into the typed taxonomy.
    ///
    /// The body is expected to carry the `{"error": {...}}` envelope; a body
    /// that does not parse degrades to details with the raw body as message
    /// rather than failing classification.
    pub fn from_response(status: u16, body: &str, request_id: Option<String>) -> Self {
        let mut details = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => ErrorDetails {
                error_type: envelope.error.error_type,
                code: envelope.error.code,
                param: envelope.error.param,
                message: envelope.error.message,
                ..ErrorDetails::default()
            },
            Err(_) => ErrorDetails {
                message: if body.trim().is_empty() {
                    None
                } else {
                    Some(body.trim().to_string())
                },
                ..ErrorDetails::default()
            },
        };
        details.status = Some(status);
        details.request_id = request_id;

        match status {
            401 => Self::Authentication(details),
            403 => Self::PermissionDenied(details),
            404 => Self::NotFound(details),
            429 => Self::RateLimited(details),
            400..=499 => Self::InvalidRequest(details),
            _ => Self::Api(details),
        }
    }

    /// Structured details, if this error originated from (or describes) an
    /// API operation
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::InvalidRequest(d)
            | Self::Authentication(d)
            | Self::PermissionDenied(d)
            | Self::NotFound(d)
            | Self::RateLimited(d)
            | Self::Api(d) => Some(d),
            _ => None,
        }
    }

    /// Server-provided (or locally supplied) message
    pub fn message(&self) -> Option<&str> {
        self.details().and_then(|d| d.message.as_deref())
    }

    /// HTTP status code, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        self.details().and_then(|d| d.status)
    }

    /// `Request-Id` of the failing response, if one was received
    pub fn request_id(&self) -> Option<&str> {
        self.details().and_then(|d| d.request_id.as_deref())
    }
}

/// Result type alias for the Centra client
pub type Result<T> = std::result::Result<T, Error>;
