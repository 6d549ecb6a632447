//! Static type-tag registry
//!
//! Maps each known `object` tag to its constructor, collection path, and
//! declared capability set. Built once at first use, looked up by exact
//! string match; unknown tags fall through to the generic container in the
//! factory.

use super::types::AnyObject;
use crate::resources::capital::FinancingOffer;
use crate::resources::financial_connections::{Account, AccountInferredBalance};
use crate::resources::{Card, Charge, Customer, InvoicePayment};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// A named operation set a resource type opts into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// `create`
    Create,
    /// `retrieve`
    Retrieve,
    /// `update`
    Update,
    /// `delete`
    Delete,
    /// `list`
    List,
    /// `search`
    Search,
}

/// One registered resource type
pub struct RegistryEntry {
    /// The `object` type tag
    pub object_name: &'static str,
    /// Top-level collection path under `/v1/`, `None` for resources that
    /// only live nested under an owner
    pub collection_path: Option<&'static str>,
    /// Capabilities the type declares
    pub capabilities: &'static [Capability],
    build: fn(Value) -> serde_json::Result<AnyObject>,
}

impl RegistryEntry {
    /// Whether the type declares the given capability
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Construct the typed wrapper from a raw JSON value
    pub(crate) fn build(&self, value: Value) -> serde_json::Result<AnyObject> {
        (self.build)(value)
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("object_name", &self.object_name)
            .field("collection_path", &self.collection_path)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

static REGISTRY: Lazy<HashMap<&'static str, RegistryEntry>> = Lazy::new(|| {
    use Capability::{Create, Delete, List, Retrieve, Search, Update};

    let entries = [
        RegistryEntry {
            object_name: "customer",
            collection_path: Some("customers"),
            capabilities: &[Create, Retrieve, Update, Delete, List, Search],
            build: |v| serde_json::from_value::<Customer>(v).map(AnyObject::Customer),
        },
        RegistryEntry {
            object_name: "charge",
            collection_path: Some("charges"),
            capabilities: &[Create, Retrieve, Update, List, Search],
            build: |v| serde_json::from_value::<Charge>(v).map(AnyObject::Charge),
        },
        // Cards have no top-level collection; they are owned by a customer
        // or an account.
        RegistryEntry {
            object_name: "card",
            collection_path: None,
            capabilities: &[Update, Delete],
            build: |v| serde_json::from_value::<Card>(v).map(AnyObject::Card),
        },
        RegistryEntry {
            object_name: "invoice_payment",
            collection_path: Some("invoice_payments"),
            capabilities: &[Retrieve, List],
            build: |v| {
                serde_json::from_value::<InvoicePayment>(v).map(AnyObject::InvoicePayment)
            },
        },
        RegistryEntry {
            object_name: "capital.financing_offer",
            collection_path: Some("capital/financing_offers"),
            capabilities: &[Retrieve, List],
            build: |v| {
                serde_json::from_value::<FinancingOffer>(v).map(AnyObject::FinancingOffer)
            },
        },
        RegistryEntry {
            object_name: "financial_connections.account",
            collection_path: Some("financial_connections/accounts"),
            capabilities: &[Retrieve, List],
            build: |v| {
                serde_json::from_value::<Account>(v).map(AnyObject::FinancialConnectionsAccount)
            },
        },
        RegistryEntry {
            object_name: "financial_connections.account_inferred_balance",
            collection_path: None,
            capabilities: &[List],
            build: |v| {
                serde_json::from_value::<AccountInferredBalance>(v)
                    .map(AnyObject::AccountInferredBalance)
            },
        },
    ];

    entries
        .into_iter()
        .map(|entry| (entry.object_name, entry))
        .collect()
});

/// Look up the registry entry for a type tag
pub fn lookup(object_name: &str) -> Option<&'static RegistryEntry> {
    REGISTRY.get(object_name)
}

/// Whether a type tag is registered with the given capability
pub fn supports(object_name: &str, capability: Capability) -> bool {
    lookup(object_name).is_some_and(|entry| entry.supports(capability))
}
