//! Charge resource

use crate::config::RequestContext;
use crate::object::{ApiObject, ApiResource, Expandable};
use crate::operations::{Createable, Listable, Retrievable, Searchable, Updateable};
use crate::resources::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A charge against a payment source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    /// Unique identifier
    pub id: String,
    /// Always `"charge"`
    pub object: String,
    /// Amount intended to be collected, in the smallest currency unit
    pub amount: i64,
    /// Amount captured so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_captured: Option<i64>,
    /// Amount refunded so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<i64>,
    /// Whether the charge was captured, as opposed to authorized only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,
    /// Creation time
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code
    pub currency: String,
    /// Customer the charge belongs to, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    /// Arbitrary description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Key-value metadata attached by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// Whether the charge succeeded (or was successfully authorized)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    /// `succeeded`, `pending`, or `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

impl ApiObject for Charge {
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

impl ApiResource for Charge {
    const OBJECT_NAME: &'static str = "charge";
    const CLASS_PATH: &'static str = "charges";
}

impl Createable for Charge {}
impl Retrievable for Charge {}
impl Updateable for Charge {}
impl Listable for Charge {}
impl Searchable for Charge {}
