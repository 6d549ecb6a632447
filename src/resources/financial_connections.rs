//! Financial Connections resources

use crate::client::Client;
use crate::config::{RequestContext, RequestOptions};
use crate::error::Result;
use crate::object::{ApiObject, ApiResource};
use crate::operations::{Listable, Retrievable};
use crate::pagination::List;
use crate::params::{encode_id, ListParams};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An external financial account a user has connected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: String,
    /// Always `"financial_connections.account"`
    pub object: String,
    /// Most recent balance snapshot, when refreshed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<AccountBalance>,
    /// `cash` or `credit`
    pub category: String,
    /// Creation time
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    /// Display name given by the institution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Name of the institution holding the account
    pub institution_name: String,
    /// Last four digits of the account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// `active`, `inactive`, or `disconnected`
    pub status: String,
    /// Finer-grained account kind, e.g. `checking`, `savings`
    pub subcategory: String,
    /// Payment method types the account can back
    #[serde(default)]
    pub supported_payment_method_types: Vec<String>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

/// A balance snapshot reported by the institution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// When the institution calculated the snapshot
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_of: Option<DateTime<Utc>>,
    /// `cash` or `credit`
    #[serde(rename = "type")]
    pub balance_type: String,
    /// Funds per currency, in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<HashMap<String, i64>>,
}

impl Account {
    /// Revoke this client's access to the account
    pub async fn disconnect(
        client: &Client,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Account> {
        let path = format!("/v1/{}/{}/disconnect", Self::CLASS_PATH, encode_id(id));
        client
            .request_object(Method::POST, &path, &[], None, options)
            .await
    }

    /// List the balances inferred from the account's transaction history.
    ///
    /// Inferred balances have no top-level collection; they only exist
    /// nested under an account.
    pub async fn list_inferred_balances(
        client: &Client,
        id: &str,
        params: ListParams,
    ) -> Result<List<AccountInferredBalance>> {
        let path = format!(
            "/v1/{}/{}/inferred_balances",
            Self::CLASS_PATH,
            encode_id(id)
        );
        client.request_list(&path, &params).await
    }
}

impl ApiObject for Account {
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

impl ApiResource for Account {
    const OBJECT_NAME: &'static str = "financial_connections.account";
    const CLASS_PATH: &'static str = "financial_connections/accounts";
}

impl Retrievable for Account {}
impl Listable for Account {}

/// A balance inferred from an account's transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInferredBalance {
    /// Unique identifier
    pub id: String,
    /// Always `"financial_connections.account_inferred_balance"`
    pub object: String,
    /// When the inference was made
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_of: Option<DateTime<Utc>>,
    /// Inferred funds per currency, in the smallest currency unit
    #[serde(default)]
    pub current: HashMap<String, i64>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

impl ApiObject for AccountInferredBalance {
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
