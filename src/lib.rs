//! # Centra Rust client
//!
//! Typed, async client for the Centra payments API.
//!
//! ## Features
//!
//! - **Typed resources**: Customers, charges, cards, invoice payments,
//!   capital financing offers, and financial connections accounts
//! - **Capability traits**: each resource implements exactly the operations
//!   its API supports (create, retrieve, update, delete, list, search)
//! - **Cursor pagination**: follow-up pages by boundary id, or the whole
//!   collection as a lazy [`futures::Stream`]
//! - **Object factory**: convert raw JSON into typed resources by `object`
//!   tag, with a lossless generic fallback for unknown shapes
//! - **Typed errors**: API failures classified by status and error payload,
//!   with the request id attached
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use centra::resources::Customer;
//! use centra::{Client, CreateParams, ListParams, Retrievable, Createable, Listable};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> centra::Result<()> {
//!     let client = Client::new("sk_test_...");
//!
//!     // Create a customer
//!     let customer = Customer::create(
//!         &client,
//!         CreateParams::new().param("email", "jenny@example.com"),
//!     )
//!     .await?;
//!
//!     // Fetch it back
//!     let customer = Customer::retrieve(&client, &customer.id, Default::default()).await?;
//!
//!     // Walk the whole collection, fetching pages on demand
//!     let page = Customer::list(&client, ListParams::new().limit(100)).await?;
//!     let all: Vec<Customer> = page.paginate(&client).try_collect().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy for API and local failures
pub mod error;

/// Client configuration, per-call options, and request context
pub mod config;

/// Request parameter builders
pub mod params;

/// HTTP transport
pub mod http;

/// API client
pub mod client;

/// Object traits, the type-tag registry, and the conversion factory
pub mod object;

/// Paginated list and search envelopes
pub mod pagination;

/// Capability traits implemented by resources
pub mod operations;

/// Typed API resources
pub mod resources;

/// Deprecated legacy import paths
pub mod api_resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::{
    clear_defaults, set_default_account, set_default_api_key, set_default_api_version,
    ClientConfig, ClientConfigBuilder, RequestContext, RequestOptions, DEFAULT_API_BASE,
    DEFAULT_API_VERSION,
};
pub use error::{Error, ErrorDetails, Result};
pub use object::{
    convert, AnyObject, ApiObject, ApiResource, Capability, Converted, Deleted, Expandable,
    GenericObject,
};
pub use operations::{Createable, Deletable, Listable, Retrievable, Searchable, Updateable};
pub use pagination::{List, SearchList};
pub use params::{
    CreateParams, DeleteParams, ListParams, RetrieveParams, SearchParams, UpdateParams,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
