//! Field-constraint checking over raw JSON documents.
//!
//! The checker walks a schema's declared fields in order and collects every
//! violation instead of stopping at the first, so one pass reports
//! everything wrong at the field level. Undeclared fields are ignored:
//! producers may attach extra keys without failing validation.

use serde_json::Value;

use super::types::{FieldConstraint, FieldType, RecordSchema};
use super::violation::{Violation, ViolationKind};
use crate::timestamp::Timestamp;

/// Check a raw document against a schema's field constraints.
///
/// Returns every violation found, in schema declaration order; an empty
/// vector means the document is field-valid. Cross-field rules are the
/// caller's concern and must only run once this returns empty.
pub fn check_document(schema: &RecordSchema, document: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_object(schema, document, "", ViolationKind::Field, &mut violations);
    violations
}

/// Checks one object against a schema, appending violations to `out`.
fn check_object(
    schema: &RecordSchema,
    document: &Value,
    prefix: &str,
    kind: ViolationKind,
    out: &mut Vec<Violation>,
) {
    let Some(obj) = document.as_object() else {
        out.push(Violation::new(
            kind,
            prefix,
            "type",
            format!("expected object, got {}", json_type_name(document)),
        ));
        return;
    };

    for (field_name, constraint) in &schema.fields {
        let path = join_path(prefix, field_name);
        match obj.get(*field_name) {
            None => {
                if constraint.required {
                    out.push(Violation::new(kind, path, "required", "required field is missing"));
                }
            }
            Some(Value::Null) => {
                // An explicit null is treated like absence for optional fields.
                if constraint.required {
                    out.push(Violation::new(kind, path, "required", "null value for required field"));
                }
            }
            Some(value) => check_value(value, constraint, &path, kind, out),
        }
    }
}

/// Checks a present, non-null value against its field type and bounds.
fn check_value(
    value: &Value,
    constraint: &FieldConstraint,
    path: &str,
    kind: ViolationKind,
    out: &mut Vec<Violation>,
) {
    let expected = constraint.field_type.type_name();
    match &constraint.field_type {
        FieldType::Text { min_len, max_len } => {
            let Some(s) = value.as_str() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            let len = s.chars().count();
            if let Some(min) = min_len {
                if len < *min {
                    out.push(Violation::new(
                        kind,
                        path,
                        "min_length",
                        format!("length must be >= {min} characters (got {len})"),
                    ));
                }
            }
            if let Some(max) = max_len {
                if len > *max {
                    out.push(Violation::new(
                        kind,
                        path,
                        "max_length",
                        format!("length must be <= {max} characters (got {len})"),
                    ));
                }
            }
        }
        FieldType::Int { min, max } => {
            // Strict: a float is not an integer.
            let Some(n) = value.as_i64() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            if let Some(min) = min {
                if n < *min {
                    out.push(Violation::new(kind, path, "min", format!("must be >= {min} (got {n})")));
                }
            }
            if let Some(max) = max {
                if n > *max {
                    out.push(Violation::new(kind, path, "max", format!("must be <= {max} (got {n})")));
                }
            }
        }
        FieldType::Float { min, max } => {
            let Some(n) = value.as_f64() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            if let Some(min) = min {
                if n < *min {
                    out.push(Violation::new(kind, path, "min", format!("must be >= {min} (got {n})")));
                }
            }
            if let Some(max) = max {
                if n > *max {
                    out.push(Violation::new(kind, path, "max", format!("must be <= {max} (got {n})")));
                }
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                out.push(type_mismatch(kind, path, expected, value));
            }
        }
        FieldType::Timestamp => {
            let Some(s) = value.as_str() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            if let Err(err) = Timestamp::parse(s) {
                out.push(Violation::new(kind, path, "timestamp", err.to_string()));
            }
        }
        FieldType::Enum { allowed } => {
            let Some(s) = value.as_str() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            if !allowed.contains(&s) {
                out.push(Violation::new(
                    kind,
                    path,
                    "enum",
                    format!("must be one of [{}] (got {s:?})", allowed.join(", ")),
                ));
            }
        }
        FieldType::RecordList { schema, min_len, max_len } => {
            let Some(items) = value.as_array() else {
                out.push(type_mismatch(kind, path, expected, value));
                return;
            };
            let len = items.len();
            if let Some(min) = min_len {
                if len < *min {
                    out.push(Violation::new(
                        kind,
                        path,
                        "min_length",
                        format!("must have at least {min} entries (got {len})"),
                    ));
                }
            }
            if let Some(max) = max_len {
                if len > *max {
                    out.push(Violation::new(
                        kind,
                        path,
                        "max_length",
                        format!("must have at most {max} entries (got {len})"),
                    ));
                }
            }
            // Elements are still checked when a length bound fails, so the
            // report names every problem in one pass.
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}.{index}");
                check_object(schema, item, &item_path, ViolationKind::Nested, out);
            }
        }
    }
}

/// Builds a type-mismatch violation naming the expected and actual types.
fn type_mismatch(kind: ViolationKind, path: &str, expected: &str, value: &Value) -> Violation {
    Violation::new(
        kind,
        path,
        "type",
        format!("expected {expected}, got {}", json_type_name(value)),
    )
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> RecordSchema {
        RecordSchema::new(
            "sample",
            vec![
                ("id", FieldConstraint::text(3, 10)),
                ("count", FieldConstraint::int(1, 20)),
                ("level", FieldConstraint::float(0.0, 100.0)),
                ("active", FieldConstraint::boolean()),
                ("checked_at", FieldConstraint::timestamp()),
                ("kind", FieldConstraint::enumeration(&["ALPHA", "BETA"])),
                ("notes", FieldConstraint::text_max(5).optional()),
            ],
        )
    }

    fn valid_doc() -> Value {
        json!({
            "id": "ABC123",
            "count": 4,
            "level": 85.5,
            "active": true,
            "checked_at": "2024-01-15T10:30:00Z",
            "kind": "ALPHA"
        })
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        assert!(check_document(&sample_schema(), &valid_doc()).is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let mut doc = valid_doc();
        doc.as_object_mut().unwrap().remove("count");
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "count");
        assert_eq!(violations[0].rule(), "required");
        assert_eq!(violations[0].message(), "required field is missing");
    }

    #[test]
    fn test_null_required_field() {
        let mut doc = valid_doc();
        doc["id"] = Value::Null;
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message(), "null value for required field");
    }

    #[test]
    fn test_optional_field_absent_or_null_passes() {
        assert!(check_document(&sample_schema(), &valid_doc()).is_empty());
        let mut doc = valid_doc();
        doc["notes"] = Value::Null;
        assert!(check_document(&sample_schema(), &doc).is_empty());
    }

    #[test]
    fn test_optional_field_checked_when_present() {
        let mut doc = valid_doc();
        doc["notes"] = json!("too long for bound");
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "notes");
        assert_eq!(violations[0].rule(), "max_length");
    }

    #[test]
    fn test_float_is_not_an_int() {
        let mut doc = valid_doc();
        doc["count"] = json!(4.5);
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message(), "expected int, got float");
    }

    #[test]
    fn test_int_accepted_for_float_field() {
        let mut doc = valid_doc();
        doc["level"] = json!(85);
        assert!(check_document(&sample_schema(), &doc).is_empty());
    }

    #[test]
    fn test_type_mismatches() {
        let mut doc = valid_doc();
        doc["id"] = json!(42);
        doc["active"] = json!("yes");
        doc["kind"] = json!(1);
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].message(), "expected text, got int");
        assert_eq!(violations[1].message(), "expected bool, got string");
        assert_eq!(violations[2].message(), "expected enum, got int");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for (count, ok) in [(0, false), (1, true), (20, true), (21, false)] {
            let mut doc = valid_doc();
            doc["count"] = json!(count);
            let violations = check_document(&sample_schema(), &doc);
            assert_eq!(violations.is_empty(), ok, "count={count}");
        }
        for (level, ok) in [(-0.1, false), (0.0, true), (100.0, true), (100.1, false)] {
            let mut doc = valid_doc();
            doc["level"] = json!(level);
            let violations = check_document(&sample_schema(), &doc);
            assert_eq!(violations.is_empty(), ok, "level={level}");
        }
    }

    #[test]
    fn test_bound_messages_name_limit_and_value() {
        let mut doc = valid_doc();
        doc["count"] = json!(25);
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations[0].message(), "must be <= 20 (got 25)");

        let mut doc = valid_doc();
        doc["level"] = json!(-10.0);
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations[0].message(), "must be >= 0 (got -10)");
    }

    #[test]
    fn test_text_length_counts_chars_not_bytes() {
        // Four characters, more than four bytes.
        let mut doc = valid_doc();
        doc["id"] = json!("Zoë7");
        assert!(check_document(&sample_schema(), &doc).is_empty());

        doc["id"] = json!("ë");
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations[0].message(), "length must be >= 3 characters (got 1)");
    }

    #[test]
    fn test_enum_match_is_case_sensitive() {
        let mut doc = valid_doc();
        doc["kind"] = json!("alpha");
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule(), "enum");
        assert!(violations[0].message().contains("ALPHA, BETA"));
        assert!(violations[0].message().contains("\"alpha\""));
    }

    #[test]
    fn test_unparseable_timestamp() {
        let mut doc = valid_doc();
        doc["checked_at"] = json!("yesterday");
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule(), "timestamp");
        assert!(violations[0].message().contains("yesterday"));
    }

    #[test]
    fn test_timestamp_must_be_string() {
        let mut doc = valid_doc();
        doc["checked_at"] = json!(1705305600);
        let violations = check_document(&sample_schema(), &doc);
        assert_eq!(violations[0].message(), "expected timestamp, got int");
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        let doc = json!({
            "id": "AB",
            "count": 0,
            "level": 150.0,
            "active": "yes",
            "checked_at": "nope",
            "kind": "GAMMA"
        });
        let violations = check_document(&sample_schema(), &doc);
        let paths: Vec<&str> = violations.iter().map(|v| v.path()).collect();
        assert_eq!(paths, vec!["id", "count", "level", "active", "checked_at", "kind"]);
        assert!(violations.iter().all(|v| v.kind() == ViolationKind::Field));
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let mut doc = valid_doc();
        doc["extra"] = json!("anything");
        assert!(check_document(&sample_schema(), &doc).is_empty());
    }

    #[test]
    fn test_non_object_document() {
        let violations = check_document(&sample_schema(), &json!([1, 2, 3]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "");
        assert_eq!(violations[0].message(), "expected object, got array");
    }

    fn roster_schema() -> RecordSchema {
        let member = RecordSchema::new(
            "member",
            vec![
                ("name", FieldConstraint::text(2, 50)),
                ("age", FieldConstraint::int(18, 80)),
            ],
        );
        RecordSchema::new(
            "roster",
            vec![("crew", FieldConstraint::record_list(member, 1, 3))],
        )
    }

    #[test]
    fn test_nested_list_element_paths_are_indexed() {
        let doc = json!({
            "crew": [
                { "name": "Sarah Connor", "age": 45 },
                { "name": "John Smith", "age": 17 }
            ]
        });
        let violations = check_document(&roster_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "crew.1.age");
        assert_eq!(violations[0].kind(), ViolationKind::Nested);
        assert_eq!(violations[0].message(), "must be >= 18 (got 17)");
    }

    #[test]
    fn test_list_length_bounds() {
        let violations = check_document(&roster_schema(), &json!({ "crew": [] }));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "crew");
        assert_eq!(violations[0].kind(), ViolationKind::Field);
        assert_eq!(violations[0].message(), "must have at least 1 entries (got 0)");

        let member = json!({ "name": "Sarah Connor", "age": 45 });
        let doc = json!({ "crew": [member, member, member, member] });
        let violations = check_document(&roster_schema(), &doc);
        assert_eq!(violations[0].message(), "must have at most 3 entries (got 4)");
    }

    #[test]
    fn test_non_object_list_element() {
        let doc = json!({ "crew": ["not a record"] });
        let violations = check_document(&roster_schema(), &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "crew.0");
        assert_eq!(violations[0].kind(), ViolationKind::Nested);
        assert_eq!(violations[0].message(), "expected object, got string");
    }

    #[test]
    fn test_list_field_must_be_array() {
        let doc = json!({ "crew": "nobody" });
        let violations = check_document(&roster_schema(), &doc);
        assert_eq!(violations[0].message(), "expected list, got string");
    }

    #[test]
    fn test_checking_is_deterministic() {
        let doc = json!({
            "id": "x",
            "count": 99,
            "level": "high",
            "active": true,
            "checked_at": "2024-01-15T10:30:00Z",
            "kind": "BETA"
        });
        let first = check_document(&sample_schema(), &doc);
        for _ in 0..50 {
            assert_eq!(check_document(&sample_schema(), &doc), first);
        }
    }
}
