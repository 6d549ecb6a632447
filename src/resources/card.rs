//! Card resource
//!
//! Cards have no top-level collection. They live under the customer or
//! account that owns them, so updates and deletes are instance methods that
//! route through the owner's path.

use crate::client::Client;
use crate::config::RequestContext;
use crate::error::{Error, Result};
use crate::object::{ApiObject, Deleted, Expandable};
use crate::params::{encode_id, DeleteParams, UpdateParams};
use crate::resources::Customer;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A card payment source attached to a customer or an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: String,
    /// Always `"card"`
    pub object: String,
    /// Owning account, when attached as an external account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Billing address city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    /// Billing address country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    /// First line of the billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second line of the billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// Billing address postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    /// Card brand, e.g. `Visa`
    pub brand: String,
    /// Two-letter ISO country code of the issuing bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Three-letter ISO currency code, for payout cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Owning customer, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    /// Whether the card has been deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Expiration month, 1 through 12
    pub exp_month: u32,
    /// Expiration year
    pub exp_year: u32,
    /// `credit`, `debit`, `prepaid`, or `unknown`
    pub funding: String,
    /// Last four digits of the card number
    pub last4: String,
    /// Cardholder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

impl Card {
    /// Instance path through the owning customer or account.
    ///
    /// A card detached from both owners cannot be addressed and fails
    /// locally.
    fn owner_path(&self) -> Result<String> {
        if let Some(customer) = self.customer.as_ref().and_then(Expandable::id) {
            return Ok(format!(
                "/v1/customers/{}/sources/{}",
                encode_id(customer),
                encode_id(&self.id)
            ));
        }
        if let Some(account) = &self.account {
            return Ok(format!(
                "/v1/accounts/{}/external_accounts/{}",
                encode_id(account),
                encode_id(&self.id)
            ));
        }
        Err(Error::invalid_request(
            "card has no owning customer or account to route the request through",
        ))
    }

    /// Update this card through its owner, returning its new state
    pub async fn update(&self, client: &Client, params: UpdateParams) -> Result<Card> {
        client
            .request_object(
                Method::POST,
                &self.owner_path()?,
                &params.to_query(),
                Some(&params.to_body()),
                &params.options,
            )
            .await
    }

    /// Delete this card through its owner
    pub async fn delete(&self, client: &Client, params: DeleteParams) -> Result<Deleted> {
        client
            .request_json(
                Method::DELETE,
                &self.owner_path()?,
                &[],
                None,
                &params.options,
            )
            .await
    }
}

impl ApiObject for Card {
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
