//! Request parameter types
//!
//! Each operation takes a small builder-style parameter struct. Only
//! required-field presence is validated locally; business-rule validation is
//! the server's job. Every parameter struct carries [`RequestOptions`] for
//! per-call credential overrides.

use crate::config::RequestOptions;
use serde_json::{Map, Value};

/// Percent-encode an object id for use in a URL path segment
pub(crate) fn encode_id(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes()).collect()
}

// ============================================================================
// Retrieve
// ============================================================================

/// Parameters for `retrieve` operations
#[derive(Debug, Clone, Default)]
pub struct RetrieveParams {
    /// Fields to expand in the response
    pub expand: Vec<String>,
    /// Per-call overrides
    pub options: RequestOptions,
}

impl RetrieveParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Set per-call options
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Render as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        expand_query(&self.expand)
    }
}

// ============================================================================
// Create / Update
// ============================================================================

/// Parameters for `create` operations: a JSON body of resource fields
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    /// Body fields sent to the server
    pub body: Map<String, Value>,
    /// Fields to expand in the response
    pub expand: Vec<String>,
    /// Per-call overrides
    pub options: RequestOptions,
}

impl CreateParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a body field
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Set per-call options
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the JSON body
    pub fn to_body(&self) -> Value {
        Value::Object(self.body.clone())
    }

    /// Render as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        expand_query(&self.expand)
    }
}

/// Parameters for `update` operations: same shape as a create body
pub type UpdateParams = CreateParams;

// ============================================================================
// Delete
// ============================================================================

/// Parameters for `delete` operations
#[derive(Debug, Clone, Default)]
pub struct DeleteParams {
    /// Per-call overrides
    pub options: RequestOptions,
}

impl DeleteParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-call options
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

// ============================================================================
// List
// ============================================================================

/// Parameters for `list` operations.
///
/// The pagination cursors (`starting_after`, `ending_before`) are object ids
/// marking the caller's place in the collection. Cursors are only valid
/// against the same filter parameters that produced them, which is why the
/// returned [`List`](crate::pagination::List) keeps a copy of these params.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Page size (server default applies when unset)
    pub limit: Option<u32>,
    /// Return objects after this id (forward pagination)
    pub starting_after: Option<String>,
    /// Return objects before this id (backward pagination)
    pub ending_before: Option<String>,
    /// Fields to expand in the response
    pub expand: Vec<String>,
    /// Resource-specific filters, passed through verbatim
    pub filters: Vec<(String, String)>,
    /// Per-call overrides
    pub options: RequestOptions,
}

impl ListParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Paginate forward from this object id
    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Paginate backward from this object id
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Add a resource-specific filter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Set per-call options
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Render as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(starting_after) = &self.starting_after {
            query.push(("starting_after".to_string(), starting_after.clone()));
        }
        if let Some(ending_before) = &self.ending_before {
            query.push(("ending_before".to_string(), ending_before.clone()));
        }
        query.extend(expand_query(&self.expand));
        query.extend(self.filters.iter().cloned());
        query
    }
}

// ============================================================================
// Search
// ============================================================================

/// Parameters for `search` operations.
///
/// Search pagination uses an opaque `page` token from the previous response
/// instead of boundary ids.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search query in the server's query language
    pub query: String,
    /// Page size (server default applies when unset)
    pub limit: Option<u32>,
    /// Opaque continuation token from a previous search page
    pub page: Option<String>,
    /// Fields to expand in the response
    pub expand: Vec<String>,
    /// Per-call overrides
    pub options: RequestOptions,
}

impl SearchParams {
    /// Create parameters for the given query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from an opaque page token
    #[must_use]
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Set per-call options
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Render as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("query".to_string(), self.query.clone())];
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(page) = &self.page {
            query.push(("page".to_string(), page.clone()));
        }
        query.extend(expand_query(&self.expand));
        query
    }
}

fn expand_query(expand: &[String]) -> Vec<(String, String)> {
    expand
        .iter()
        .map(|field| ("expand[]".to_string(), field.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
        query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_encode_id() {
        assert_eq!(encode_id("cus_123"), "cus_123");
        assert_eq!(encode_id("a/b c"), "a%2Fb+c");
        assert_eq!(encode_id("id?x=1&y=2"), "id%3Fx%3D1%26y%3D2");
    }

    #[test]
    fn test_list_params_query() {
        let params = ListParams::new()
            .limit(2)
            .starting_after("obj_2")
            .expand("data.customer")
            .filter("status", "paid");

        assert_eq!(
            pairs(&params.to_query()),
            vec![
                ("limit", "2"),
                ("starting_after", "obj_2"),
                ("expand[]", "data.customer"),
                ("status", "paid"),
            ]
        );
    }

    #[test]
    fn test_search_params_query() {
        let params = SearchParams::new("status:'paid'").limit(10).page("tok_1");
        assert_eq!(
            pairs(&params.to_query()),
            vec![
                ("query", "status:'paid'"),
                ("limit", "10"),
                ("page", "tok_1"),
            ]
        );
    }

    #[test]
    fn test_create_params_body() {
        let params = CreateParams::new()
            .param("email", "jane@example.com")
            .param("balance", 50)
            .expand("default_source");

        let body = params.to_body();
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["balance"], 50);
        assert_eq!(pairs(&params.to_query()), vec![("expand[]", "default_source")]);
    }

    #[test]
    fn test_empty_params() {
        assert!(RetrieveParams::new().to_query().is_empty());
        assert!(ListParams::new().to_query().is_empty());
    }
}
