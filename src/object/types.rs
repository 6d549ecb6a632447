//! Core object traits and containers

use crate::config::RequestContext;
use crate::resources::capital::FinancingOffer;
use crate::resources::financial_connections::{Account, AccountInferredBalance};
use crate::resources::{Card, Charge, Customer, InvoicePayment};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// ============================================================================
// Object traits
// ============================================================================

/// Behavior shared by every object constructed from an API response
pub trait ApiObject {
    /// Unique identifier, when the object carries one
    fn id(&self) -> Option<&str>;

    /// The request context this object was fetched with
    fn context(&self) -> &RequestContext;

    /// Attach the request context after construction
    fn set_context(&mut self, context: RequestContext);
}

/// A typed resource with a fixed type tag and top-level collection path
pub trait ApiResource: ApiObject {
    /// Value of the `object` type tag
    const OBJECT_NAME: &'static str;

    /// Collection path segment under `/v1/` (e.g. `customers`)
    const CLASS_PATH: &'static str;
}

// ============================================================================
// Expandable references
// ============================================================================

/// A field that is either a bare object id or the embedded full object,
/// depending on whether the caller requested expansion.
///
/// Callers must check which variant is present before dereferencing nested
/// fields; [`Expandable::id`] works on either variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Bare identifier
    Id(String),
    /// Embedded full object
    Object(Box<T>),
}

impl<T: ApiObject> Expandable<T> {
    /// The referenced object's id, regardless of variant
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Object(object) => object.id(),
        }
    }

    /// Whether the full object is embedded
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The embedded object, if expanded
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    /// Consume into the embedded object, if expanded
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }
}

// ============================================================================
// Conversion results
// ============================================================================

/// One registered resource type, selected by its `object` tag
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyObject {
    /// `customer`
    Customer(Customer),
    /// `charge`
    Charge(Charge),
    /// `card`
    Card(Card),
    /// `invoice_payment`
    InvoicePayment(InvoicePayment),
    /// `capital.financing_offer`
    FinancingOffer(FinancingOffer),
    /// `financial_connections.account`
    FinancialConnectionsAccount(Account),
    /// `financial_connections.account_inferred_balance`
    AccountInferredBalance(AccountInferredBalance),
}

impl AnyObject {
    /// The `object` type tag of the wrapped resource
    pub fn object_name(&self) -> &'static str {
        match self {
            Self::Customer(_) => "customer",
            Self::Charge(_) => "charge",
            Self::Card(_) => "card",
            Self::InvoicePayment(_) => "invoice_payment",
            Self::FinancingOffer(_) => "capital.financing_offer",
            Self::FinancialConnectionsAccount(_) => "financial_connections.account",
            Self::AccountInferredBalance(_) => {
                "financial_connections.account_inferred_balance"
            }
        }
    }
}

impl ApiObject for AnyObject {
    fn id(&self) -> Option<&str> {
        match self {
            Self::Customer(o) => o.id(),
            Self::Charge(o) => o.id(),
            Self::Card(o) => o.id(),
            Self::InvoicePayment(o) => o.id(),
            Self::FinancingOffer(o) => o.id(),
            Self::FinancialConnectionsAccount(o) => o.id(),
            Self::AccountInferredBalance(o) => o.id(),
        }
    }

    fn context(&self) -> &RequestContext {
        match self {
            Self::Customer(o) => o.context(),
            Self::Charge(o) => o.context(),
            Self::Card(o) => o.context(),
            Self::InvoicePayment(o) => o.context(),
            Self::FinancingOffer(o) => o.context(),
            Self::FinancialConnectionsAccount(o) => o.context(),
            Self::AccountInferredBalance(o) => o.context(),
        }
    }

    fn set_context(&mut self, context: RequestContext) {
        match self {
            Self::Customer(o) => o.set_context(context),
            Self::Charge(o) => o.set_context(context),
            Self::Card(o) => o.set_context(context),
            Self::InvoicePayment(o) => o.set_context(context),
            Self::FinancingOffer(o) => o.set_context(context),
            Self::FinancialConnectionsAccount(o) => o.set_context(context),
            Self::AccountInferredBalance(o) => o.set_context(context),
        }
    }
}

/// Result of converting one JSON value
#[derive(Debug, Clone)]
pub enum Converted {
    /// A mapping whose tag matched a registered resource type
    Resource(Box<AnyObject>),
    /// A mapping with no tag, or a tag the registry does not know
    Generic(GenericObject),
    /// A sequence, converted element-wise
    Sequence(Vec<Converted>),
    /// Any other JSON value, passed through unchanged
    Scalar(Value),
}

impl Converted {
    /// The typed resource, if this converted to one
    pub fn as_resource(&self) -> Option<&AnyObject> {
        match self {
            Self::Resource(object) => Some(object),
            _ => None,
        }
    }

    /// The generic container, if the tag was absent or unrecognized
    pub fn as_generic(&self) -> Option<&GenericObject> {
        match self {
            Self::Generic(object) => Some(object),
            _ => None,
        }
    }

    /// The converted sequence, if the input was one
    pub fn as_sequence(&self) -> Option<&[Converted]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The raw scalar, if the input was one
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl Serialize for Converted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Resource(object) => object.serialize(serializer),
            Self::Generic(object) => object.serialize(serializer),
            Self::Sequence(items) => items.serialize(serializer),
            Self::Scalar(value) => value.serialize(serializer),
        }
    }
}

// ============================================================================
// Generic container
// ============================================================================

/// Lossless container for mappings the registry has no type for.
///
/// Every field of the input is preserved; nested mappings and sequences are
/// recursively converted, so a recognized tag inside an unrecognized object
/// still produces the typed wrapper.
#[derive(Debug, Clone, Default)]
pub struct GenericObject {
    fields: BTreeMap<String, Converted>,
    context: RequestContext,
}

impl GenericObject {
    pub(crate) fn from_map(map: Map<String, Value>, context: &RequestContext) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, super::factory::convert(value, context)))
            .collect();
        Self {
            fields,
            context: context.clone(),
        }
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&Converted> {
        self.fields.get(key)
    }

    /// The `object` type tag, when the mapping carried one
    pub fn object_name(&self) -> Option<&str> {
        self.get("object")?.as_scalar()?.as_str()
    }

    /// Field names, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the container has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ApiObject for GenericObject {
    fn id(&self) -> Option<&str> {
        self.get("id")?.as_scalar()?.as_str()
    }

    fn context(&self) -> &RequestContext {
        &self.context
    }

    fn set_context(&mut self, context: RequestContext) {
        self.context = context;
    }
}

impl Serialize for GenericObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter())
    }
}

impl<'de> Deserialize<'de> for GenericObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(map, &RequestContext::default()))
    }
}

// ============================================================================
// Delete confirmation
// ============================================================================

/// Confirmation envelope returned by `delete` operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    /// Id of the deleted object
    pub id: String,
    /// Type tag of the deleted object
    pub object: String,
    /// Always `true` for a deleted object
    pub deleted: bool,
}
