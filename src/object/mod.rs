//! Typed object model and conversion
//!
//! Everything returned by the API is a JSON mapping carrying an `object`
//! type tag. This module defines the object traits shared by all resources,
//! the [`Expandable`] reference type, the lossless [`GenericObject`]
//! container, and the factory that turns raw JSON into the matching typed
//! wrapper via a static tag registry.

mod factory;
mod registry;
mod types;

pub use factory::convert;
pub use registry::{lookup, supports, Capability, RegistryEntry};
pub use types::{AnyObject, ApiObject, ApiResource, Converted, Deleted, Expandable, GenericObject};

#[cfg(test)]
mod tests;
