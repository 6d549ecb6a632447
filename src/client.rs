//! API client
//!
//! [`Client`] sits between the typed operations and the HTTP transport: it
//! resolves credentials at call time (per-call options, then the client's
//! own config, then process-wide defaults), assembles the auth and version
//! headers, issues exactly one HTTP call per operation, classifies non-2xx
//! responses into the typed error taxonomy, and attaches the
//! [`RequestContext`] to everything it deserializes.

use crate::config::{self, ClientConfig, RequestContext, RequestOptions, DEFAULT_API_VERSION};
use crate::error::{Error, ErrorDetails, Result};
use crate::http::{HttpTransport, TransportConfig};
use crate::object::{self, ApiObject, Capability, Deleted};
use crate::pagination::{List, SearchList};
use crate::params::{encode_id, ListParams, SearchParams};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Credentials and per-call headers resolved for one request
#[derive(Debug)]
struct ResolvedRequest {
    api_key: String,
    api_version: String,
    account: Option<String>,
    idempotency_key: Option<String>,
}

/// Client for the Centra API
pub struct Client {
    transport: HttpTransport,
    config: ClientConfig,
}

impl Client {
    /// Create a client using the given API key and default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::builder().api_key(api_key).build())
    }

    /// Create a client from a full configuration
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = HttpTransport::with_config(TransportConfig {
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        });
        Self { transport, config }
    }

    /// The client's configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve credentials for one call. Read at call time so process-wide
    /// defaults set after client construction still apply.
    fn resolve(&self, options: &RequestOptions) -> Result<ResolvedRequest> {
        let api_key = options
            .api_key
            .clone()
            .or_else(|| self.config.api_key.clone())
            .or_else(config::default_api_key)
            .ok_or_else(|| {
                Error::authentication(
                    "no API key provided; set one on the client, in RequestOptions, \
                     or via centra::set_default_api_key",
                )
            })?;
        let api_version = options
            .api_version
            .clone()
            .or_else(|| self.config.api_version.clone())
            .or_else(config::default_api_version)
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let account = options
            .account
            .clone()
            .or_else(|| self.config.account.clone())
            .or_else(config::default_account);

        Ok(ResolvedRequest {
            api_key,
            api_version,
            account,
            idempotency_key: options.idempotency_key.clone(),
        })
    }

    fn headers(&self, resolved: &ResolvedRequest) -> HashMap<String, String> {
        let mut headers = self.config.default_headers.clone();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", resolved.api_key),
        );
        headers.insert("Centra-Version".to_string(), resolved.api_version.clone());
        if let Some(account) = &resolved.account {
            headers.insert("Centra-Account".to_string(), account.clone());
        }
        if let Some(key) = &resolved.idempotency_key {
            headers.insert("Idempotency-Key".to_string(), key.clone());
        }
        headers
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue one request and return the parsed body plus the request
    /// context it was made with.
    ///
    /// Non-2xx responses are classified into the typed error taxonomy and
    /// never retried here.
    pub async fn request_value(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<(Value, RequestContext)> {
        let resolved = self.resolve(options)?;
        let headers = self.headers(&resolved);
        let url = self.build_url(path);

        debug!(%method, path, "issuing API request");
        let response = self
            .transport
            .request(method, &url, query, &headers, body)
            .await?;

        if !response.is_success() {
            warn!(
                status = response.status,
                path,
                request_id = response.request_id.as_deref().unwrap_or(""),
                "API request failed"
            );
            return Err(Error::from_response(
                response.status,
                &response.body,
                response.request_id,
            ));
        }

        // A success status with an unparseable body is a server fault, not
        // a caller-side JSON error.
        let value: Value = serde_json::from_str(&response.body).map_err(|err| {
            Error::Api(ErrorDetails {
                status: Some(response.status),
                message: Some(format!("invalid JSON in response body: {err}")),
                request_id: response.request_id.clone(),
                ..ErrorDetails::default()
            })
        })?;
        let context = RequestContext {
            api_key: Some(resolved.api_key),
            api_version: Some(resolved.api_version),
            account: resolved.account,
            request_id: response.request_id,
        };
        Ok((value, context))
    }

    /// Issue one request and deserialize the body without attaching context
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<T> {
        let (value, _) = self.request_value(method, path, query, body, options).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Issue one request and deserialize into a typed resource, attaching
    /// the request context
    pub(crate) async fn request_object<T: ApiObject + DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<T> {
        let (value, context) = self.request_value(method, path, query, body, options).await?;
        let mut object: T = serde_json::from_value(value)?;
        object.set_context(context);
        Ok(object)
    }

    /// Fetch one list page, remembering the filter params for follow-up
    /// pages
    pub(crate) async fn request_list<T: ApiObject + DeserializeOwned>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<List<T>> {
        let (value, context) = self
            .request_value(Method::GET, path, &params.to_query(), None, &params.options)
            .await?;
        let mut list: List<T> = serde_json::from_value(value)?;
        list.attach(params.clone(), &context);
        Ok(list)
    }

    /// Fetch one search page, remembering the query for follow-up pages
    pub(crate) async fn request_search<T: ApiObject + DeserializeOwned>(
        &self,
        path: &str,
        params: &SearchParams,
    ) -> Result<SearchList<T>> {
        let (value, context) = self
            .request_value(Method::GET, path, &params.to_query(), None, &params.options)
            .await?;
        let mut list: SearchList<T> = serde_json::from_value(value)?;
        list.attach(params.clone(), &context);
        Ok(list)
    }

    /// Delete an object by type tag and id.
    ///
    /// The tag is checked against the registry before any network traffic:
    /// an unknown tag, a tag without the `Delete` capability, or a tag with
    /// no top-level collection fails locally.
    pub async fn delete_untyped(
        &self,
        object_name: &str,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Deleted> {
        let entry = object::lookup(object_name).ok_or_else(|| {
            Error::invalid_request(format!("unknown object type `{object_name}`"))
        })?;
        if !entry.supports(Capability::Delete) {
            return Err(Error::invalid_request(format!(
                "`{object_name}` does not declare the delete capability"
            )));
        }
        let Some(collection) = entry.collection_path else {
            return Err(Error::invalid_request(format!(
                "`{object_name}` has no top-level collection; delete it through its owning resource"
            )));
        };
        let path = format!("/v1/{}/{}", collection, encode_id(id));
        self.request_json(Method::DELETE, &path, &[], None, options)
            .await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.config.api_base)
            .field("has_api_key", &self.config.api_key.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Process-wide defaults are shared state; tests that touch them take
    // this lock.
    static DEFAULTS_LOCK: Mutex<()> = Mutex::new(());

    fn defaults_guard() -> MutexGuard<'static, ()> {
        DEFAULTS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_build_url() {
        let client = Client::from_config(
            ClientConfig::builder()
                .api_key("sk_test_1")
                .api_base("https://api.example.com/")
                .build(),
        );
        assert_eq!(
            client.build_url("/v1/customers"),
            "https://api.example.com/v1/customers"
        );
        assert_eq!(
            client.build_url("v1/customers"),
            "https://api.example.com/v1/customers"
        );
        assert_eq!(
            client.build_url("https://other.example.com/v1/x"),
            "https://other.example.com/v1/x"
        );
    }

    #[test]
    fn test_resolve_prefers_per_call_options() {
        let client = Client::from_config(
            ClientConfig::builder()
                .api_key("sk_client")
                .api_version("2023-01-01")
                .account("acct_client")
                .build(),
        );

        let resolved = client.resolve(&RequestOptions::new()).unwrap();
        assert_eq!(resolved.api_key, "sk_client");
        assert_eq!(resolved.api_version, "2023-01-01");
        assert_eq!(resolved.account.as_deref(), Some("acct_client"));

        let options = RequestOptions::new()
            .api_key("sk_call")
            .api_version("2022-08-01")
            .account("acct_call")
            .idempotency_key("idem_1");
        let resolved = client.resolve(&options).unwrap();
        assert_eq!(resolved.api_key, "sk_call");
        assert_eq!(resolved.api_version, "2022-08-01");
        assert_eq!(resolved.account.as_deref(), Some("acct_call"));
        assert_eq!(resolved.idempotency_key.as_deref(), Some("idem_1"));
    }

    #[test]
    fn test_missing_api_key_is_local_authentication_error() {
        let _guard = defaults_guard();
        let client = Client::from_config(ClientConfig::default());
        crate::config::clear_defaults();

        let err = client.resolve(&RequestOptions::new()).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_resolve_falls_back_to_process_defaults() {
        let _guard = defaults_guard();
        crate::config::set_default_api_key("sk_process");
        crate::config::set_default_api_version("2020-03-02");
        crate::config::set_default_account("acct_process");

        let client = Client::from_config(ClientConfig::default());
        let resolved = client.resolve(&RequestOptions::new()).unwrap();
        assert_eq!(resolved.api_key, "sk_process");
        assert_eq!(resolved.api_version, "2020-03-02");
        assert_eq!(resolved.account.as_deref(), Some("acct_process"));

        // Client config still wins over the process default.
        let client = Client::from_config(
            ClientConfig::builder()
                .api_key("sk_client")
                .api_version("2023-01-01")
                .build(),
        );
        let resolved = client.resolve(&RequestOptions::new()).unwrap();
        assert_eq!(resolved.api_key, "sk_client");
        assert_eq!(resolved.api_version, "2023-01-01");
        // The account was never set on the client, so the default holds.
        assert_eq!(resolved.account.as_deref(), Some("acct_process"));

        crate::config::clear_defaults();
    }

    #[test]
    fn test_headers_carry_credentials() {
        // Relies on no process defaults being set.
        let _guard = defaults_guard();
        crate::config::clear_defaults();
        let client = Client::new("sk_test_9");
        let resolved = client
            .resolve(&RequestOptions::new().idempotency_key("idem_2"))
            .unwrap();
        let headers = client.headers(&resolved);

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer sk_test_9".to_string())
        );
        assert_eq!(
            headers.get("Centra-Version"),
            Some(&DEFAULT_API_VERSION.to_string())
        );
        assert_eq!(headers.get("Idempotency-Key"), Some(&"idem_2".to_string()));
        assert!(!headers.contains_key("Centra-Account"));
    }
}
