//! Invoice payment resource

use crate::config::RequestContext;
use crate::object::{ApiObject, ApiResource, Expandable, GenericObject};
use crate::operations::{Listable, Retrievable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payment attached to an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePayment {
    /// Unique identifier
    pub id: String,
    /// Always `"invoice_payment"`
    pub object: String,
    /// Amount the payment is intended to settle
    pub amount_requested: i64,
    /// Amount actually applied to the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<i64>,
    /// Excess amount over what the invoice owed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_overpaid: Option<i64>,
    /// Charge that funded the payment, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<Expandable<super::Charge>>,
    /// Creation time
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Invoice the payment is attached to, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Expandable<GenericObject>>,
    /// Whether this is the invoice's default payment
    #[serde(default)]
    pub is_default: bool,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Payment intent that funded the payment, expanded on request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<Expandable<GenericObject>>,
    /// `open`, `paid`, or `canceled`
    pub status: String,
    /// Timestamps of the status changes the payment has gone through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_transitions: Option<InvoicePaymentStatusTransitions>,
    /// Fields this client version has no declared slot for
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    context: RequestContext,
}

/// When an invoice payment entered each terminal status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePaymentStatusTransitions {
    /// When the payment was canceled, if it was
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub canceled_at: Option<DateTime<Utc>>,
    /// When the payment settled, if it did
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_at: Option<DateTime<Utc>>,
}

impl ApiObject for InvoicePayment {
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

impl ApiResource for InvoicePayment {
    const OBJECT_NAME: &'static str = "invoice_payment";
    const CLASS_PATH: &'static str = "invoice_payments";
}

impl Retrievable for InvoicePayment {}
impl Listable for InvoicePayment {}
