//! Nested-document flattening for tabular export.

use serde_json::{Map, Value};

/// Flatten a document into single-level key/value pairs.
///
/// Nested objects contribute `parent_key` entries, lists of objects
/// contribute numbered `parent_index_key` entries, and lists of scalars
/// collapse into a single comma-joined cell.
pub fn flatten_document(document: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    if let Value::Object(fields) = document {
        flatten_into(&mut flat, fields, "");
    }
    flat
}

fn flatten_into(flat: &mut Map<String, Value>, fields: &Map<String, Value>, prefix: &str) {
    for (key, value) in fields {
        let flat_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}_{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(flat, nested, &flat_key),
            Value::Array(items) if items.first().map_or(false, Value::is_object) => {
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::Object(nested) => {
                            flatten_into(flat, nested, &format!("{flat_key}_{index}"));
                        }
                        other => {
                            flat.insert(format!("{flat_key}_{index}"), other.clone());
                        }
                    }
                }
            }
            Value::Array(items) => {
                let joined = items.iter().map(scalar_text).collect::<Vec<_>>().join(", ");
                flat.insert(flat_key, Value::String(joined));
            }
            other => {
                flat.insert(flat_key, other.clone());
            }
        }
    }
}

/// Cell text for a flattened value. Nulls become empty cells.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
