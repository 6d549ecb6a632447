//! Typed object factory
//!
//! Turns raw JSON from the API into the matching typed wrapper based on the
//! embedded `object` type tag. Conversion never fails: a mapping with an
//! unrecognized tag, or one whose shape does not match the registered
//! schema, becomes a [`GenericObject`] that preserves every field. Missing
//! or malformed identity fields only become errors once resource-specific
//! logic needs them.

use super::registry;
use super::types::{ApiObject, Converted, GenericObject};
use crate::config::RequestContext;
use serde_json::{Map, Value};
use tracing::debug;

/// Convert one parsed JSON value into its typed form.
///
/// Mappings with a recognized `object` tag become the registered resource
/// type, with the request context attached; other mappings become generic
/// containers with recursively converted fields; sequences convert
/// element-wise; scalars pass through unchanged.
pub fn convert(value: Value, context: &RequestContext) -> Converted {
    match value {
        Value::Object(map) => convert_map(map, context),
        Value::Array(items) => Converted::Sequence(
            items
                .into_iter()
                .map(|item| convert(item, context))
                .collect(),
        ),
        scalar => Converted::Scalar(scalar),
    }
}

fn convert_map(map: Map<String, Value>, context: &RequestContext) -> Converted {
    if let Some(tag) = map.get("object").and_then(Value::as_str) {
        if let Some(entry) = registry::lookup(tag) {
            // The tag only selects the schema; a mapping that does not fit
            // it degrades to the generic container instead of erroring.
            match entry.build(Value::Object(map.clone())) {
                Ok(mut object) => {
                    object.set_context(context.clone());
                    return Converted::Resource(Box::new(object));
                }
                Err(err) => {
                    debug!(tag, error = %err, "typed conversion failed, keeping generic object");
                }
            }
        }
    }
    Converted::Generic(GenericObject::from_map(map, context))
}
