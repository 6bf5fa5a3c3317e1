//! Data-described coercion schema for the draft shape.
//!
//! One table drives every shape fix-up instead of scattered per-caller
//! checks: list-typed fields are forced to arrays, object-typed fields to
//! objects, and list keys nested one level below an object field are forced
//! to arrays as well. Mistakes deeper than one level pass through.

use serde_json::{Map, Value};

/// Top-level fields that must be arrays after normalization. Both the
/// canonical snake_case spelling and the camelCase wire spelling are listed
/// because coercion runs on the raw parsed object.
pub const LIST_FIELDS: &[&str] = &[
    "features",
    "pros",
    "cons",
    "useCases",
    "use_cases",
    "alternatives",
];

/// Object-typed fields paired with the list keys nested directly below them.
/// These are materialized even when absent, so callers always see the field.
pub const OBJECT_FIELDS: &[(&str, &[&str])] = &[("pricing", &["plans"])];

/// Apply the coercion rules to a parsed top-level object in place.
pub fn coerce_shape(obj: &mut Map<String, Value>) {
    for field in LIST_FIELDS {
        if let Some(value) = obj.get_mut(*field) {
            if !value.is_array() {
                tracing::debug!(field = *field, "replacing non-array value with empty list");
                *value = Value::Array(Vec::new());
            }
        }
    }
    for (field, nested_lists) in OBJECT_FIELDS {
        let entry = obj
            .entry((*field).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            tracing::debug!(field = *field, "replacing non-object value with empty object");
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            for nested in *nested_lists {
                let nested_entry = map
                    .entry((*nested).to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                if !nested_entry.is_array() {
                    *nested_entry = Value::Array(Vec::new());
                }
            }
        }
    }
}
