//! Customer resource

use crate::config::RequestContext;
use crate::object::{ApiObject, ApiResource, Expandable};
use crate::operations::{
    Createable, Deletable, Listable, Retrievable, Searchable, Updateable,
};
use crate::resources::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A customer of your business.
///
/// Customers carry a running balance, an optional default payment source,
/// and arbitrary key-value metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: String,
    /// Always `"customer"`
    pub object: String,
    /// Current balance in the smallest currency unit; negative means credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    /// Creation time
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code of the balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Default payment source, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source: Option<Expandable<Card>>,
    /// Whether the customer's latest invoice went unpaid past its due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delinquent: Option<bool>,
    /// Arbitrary description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Key-value metadata attached by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// Full name or business name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

impl ApiObject for Customer {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn context(&self) -> &RequestContext {
        &self.context
    }

    fn set_context(&mut self, context: RequestContext) {
        self.context = context;
    }
}

impl ApiResource for Customer {
    const OBJECT_NAME: &'static str = "customer";
    const CLASS_PATH: &'static str = "customers";
}

impl Createable for Customer {}
impl Retrievable for Customer {}
impl Updateable for Customer {}
impl Deletable for Customer {}
impl Listable for Customer {}
impl Searchable for Customer {}
