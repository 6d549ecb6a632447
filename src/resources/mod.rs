//! Typed API resources
//!
//! Each resource is a plain deserializable struct plus the capability traits
//! it opts into. Unknown response fields are preserved in an `extra` map
//! rather than rejected, so new API fields never break deserialization.

pub mod capital;
pub mod financial_connections;

mod card;
mod charge;
mod customer;
mod invoice_payment;

pub use card::Card;
pub use charge::Charge;
pub use customer::Customer;
pub use invoice_payment::{InvoicePayment, InvoicePaymentStatusTransitions};
