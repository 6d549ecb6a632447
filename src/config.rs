//! Client configuration and request context
//!
//! Credentials and API version can live in three places, resolved at call
//! time in this order: per-call [`RequestOptions`], the owning
//! [`ClientConfig`], then the process-wide defaults set through
//! [`set_default_api_key`] and friends.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.centra.io";

/// API version pinned by this release of the client
pub const DEFAULT_API_VERSION: &str = "2024-06-20";

// ============================================================================
// Process-wide defaults
// ============================================================================

#[derive(Debug, Clone, Default)]
struct ProcessDefaults {
    api_key: Option<String>,
    api_version: Option<String>,
    account: Option<String>,
}

static DEFAULTS: Lazy<RwLock<ProcessDefaults>> =
    Lazy::new(|| RwLock::new(ProcessDefaults::default()));

/// Set the process-wide default API key
pub fn set_default_api_key(api_key: impl Into<String>) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    defaults.api_key = Some(api_key.into());
}

/// Set the process-wide default API version
pub fn set_default_api_version(api_version: impl Into<String>) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    defaults.api_version = Some(api_version.into());
}

/// Set the process-wide default connected account
pub fn set_default_account(account: impl Into<String>) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    defaults.account = Some(account.into());
}

/// Clear all process-wide defaults (mainly useful in tests)
pub fn clear_defaults() {
    let mut defaults = DEFAULTS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    *defaults = ProcessDefaults::default();
}

fn process_defaults() -> ProcessDefaults {
    DEFAULTS
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

pub(crate) fn default_api_key() -> Option<String> {
    process_defaults().api_key
}

pub(crate) fn default_api_version() -> Option<String> {
    process_defaults().api_version
}

pub(crate) fn default_account() -> Option<String> {
    process_defaults().account
}

// ============================================================================
// Client configuration
// ============================================================================

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key used for every request, unless overridden per call
    pub api_key: Option<String>,
    /// Base URL for all requests
    pub api_base: String,
    /// API version sent in the `Centra-Version` header; falls back to the
    /// process default, then to [`DEFAULT_API_VERSION`]
    pub api_version: Option<String>,
    /// Connected account to act on behalf of, if any
    pub account: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: None,
            account: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("centra-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.api_base = api_base.into();
        self
    }

    /// Set the API version
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = Some(api_version.into());
        self
    }

    /// Set the connected account
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.config.account = Some(account.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ============================================================================
// Per-call options and request context
// ============================================================================

/// Per-call overrides for credentials and request behavior
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// API key to use for this call only
    pub api_key: Option<String>,
    /// API version to use for this call only
    pub api_version: Option<String>,
    /// Connected account to act on behalf of for this call only
    pub account: Option<String>,
    /// Idempotency key sent with mutating requests
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    /// Create empty options (everything falls through to client/process
    /// defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API key
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API version
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Override the connected account
    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set an idempotency key
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}

/// Snapshot of the credentials, version, and request id an object was
/// fetched with.
///
/// Attached to every resource constructed from an API response so follow-up
/// calls made through the object reuse the same context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// API key the request was made with
    pub api_key: Option<String>,
    /// API version the request was made with
    pub api_version: Option<String>,
    /// Connected account the request was made on behalf of
    pub account: Option<String>,
    /// `Request-Id` header of the response this object came from
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.api_version.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.user_agent.starts_with("centra-rust/"));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .api_key("sk_test_123")
            .api_base("https://api.example.com")
            .api_version("2023-01-01")
            .account("acct_1")
            .timeout(Duration::from_secs(5))
            .header("X-Custom", "value")
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.api_key.as_deref(), Some("sk_test_123"));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.api_version.as_deref(), Some("2023-01-01"));
        assert_eq!(config.account.as_deref(), Some("acct_1"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.default_headers.get("X-Custom"),
            Some(&"value".to_string())
        );
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new()
            .api_key("sk_test_override")
            .api_version("2022-08-01")
            .account("acct_2")
            .idempotency_key("idem_1");

        assert_eq!(options.api_key.as_deref(), Some("sk_test_override"));
        assert_eq!(options.api_version.as_deref(), Some("2022-08-01"));
        assert_eq!(options.account.as_deref(), Some("acct_2"));
        assert_eq!(options.idempotency_key.as_deref(), Some("idem_1"));
    }
}
