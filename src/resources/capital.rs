//! Capital financing resources

use crate::client::Client;
use crate::config::{RequestContext, RequestOptions};
use crate::error::Result;
use crate::object::{ApiObject, ApiResource};
use crate::operations::{Listable, Retrievable};
use crate::params::encode_id;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A financing offer extended to a connected account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingOffer {
    /// Unique identifier
    pub id: String,
    /// Always `"capital.financing_offer"`
    pub object: String,
    /// Terms the account holder accepted, once they have
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_terms: Option<FinancingOfferTerms>,
    /// Connected account the offer was extended to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Creation time
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    /// Epoch seconds after which the offer expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<f64>,
    /// `flex_loan` or `cash_advance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_type: Option<String>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Terms as offered, before acceptance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_terms: Option<FinancingOfferTerms>,
    /// Lifecycle status, e.g. `undelivered`, `delivered`, `accepted`
    pub status: String,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

/// Terms of a financing offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingOfferTerms {
    /// Amount advanced, in the smallest currency unit
    pub advance_amount: i64,
    /// Campaign the offer came from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    /// Three-letter ISO currency code
    pub currency: String,
    /// Flat fee on the advance
    pub fee_amount: i64,
    /// Fee discount carried over from a previous financing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_financing_fee_discount_amount: Option<i64>,
    /// Fraction of sales withheld toward repayment
    pub withhold_rate: f64,
}

impl FinancingOffer {
    /// Acknowledge that the offer has been shown to the account holder
    pub async fn mark_delivered(
        client: &Client,
        id: &str,
        options: &RequestOptions,
    ) -> Result<FinancingOffer> {
        let path = format!(
            "/v1/{}/{}/mark_delivered",
            Self::CLASS_PATH,
            encode_id(id)
        );
        client
            .request_object(Method::POST, &path, &[], None, options)
            .await
    }
}

impl ApiObject for FinancingOffer {
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

impl ApiResource for FinancingOffer {
    const OBJECT_NAME: &'static str = "capital.financing_offer";
    const CLASS_PATH: &'static str = "capital/financing_offers";
}

impl Retrievable for FinancingOffer {}
impl Listable for FinancingOffer {}
