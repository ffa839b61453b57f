//! Typed observatory records and their validation pipeline.
//!
//! Each record kind owns a schema of field constraints plus, where the
//! domain demands it, record-level rules that only make sense once every
//! field is individually valid. Validation is the only construction path:
//! a record either exists fully valid or was never built, and it is
//! immutable afterwards.

mod contact;
mod crew;
mod mission;
mod station;

pub use contact::{Contact, ContactType};
pub use crew::{CrewMember, Rank};
pub use mission::Mission;
pub use station::Station;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constraint::{
    check_document, RecordSchema, ValidationError, ValidationResult, Violation,
};

/// Record-level rules, run only after every field constraint has passed.
///
/// Rules fail fast in declared order: the first violated rule is the one
/// reported. The default implementation has no rules.
pub trait CrossValidate {
    fn cross_validate(&self) -> Result<(), Violation> {
        Ok(())
    }
}

/// Validate a raw document and construct the typed record.
///
/// Three stages, strictly ordered:
/// 1. every field constraint is checked and all violations collected;
/// 2. the typed record is built, applying declared defaults;
/// 3. record-level rules run, stopping at the first failure.
///
/// Stage 2 only sees field-valid documents and stage 3 only constructed
/// records, so rules may assume well-typed, in-range values.
pub fn validate_document<T>(schema: &RecordSchema, document: &Value) -> ValidationResult<T>
where
    T: DeserializeOwned + CrossValidate,
{
    let violations = check_document(schema, document);
    if !violations.is_empty() {
        return Err(ValidationError::new(schema.name, violations));
    }

    // Explicit nulls passed the optional-field checks above; prune them so
    // declared defaults apply during decoding.
    let mut document = document.clone();
    strip_nulls(&mut document);

    let record: T = serde_json::from_value(document).map_err(|err| {
        ValidationError::new(
            schema.name,
            vec![Violation::field(
                "",
                "decode",
                format!("field-valid document failed to decode: {err}"),
            )],
        )
    })?;

    record
        .cross_validate()
        .map_err(|violation| ValidationError::new(schema.name, vec![violation]))?;
    Ok(record)
}

/// Removes null-valued keys at every object level.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}

/// The record kinds this toolkit validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Station,
    Contact,
    CrewMember,
    Mission,
}

impl RecordKind {
    /// Record kind name used in reports and responses.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Station => "station",
            RecordKind::Contact => "contact",
            RecordKind::CrewMember => "crew_member",
            RecordKind::Mission => "mission",
        }
    }

    /// The field-constraint schema for this kind.
    pub fn schema(&self) -> RecordSchema {
        match self {
            RecordKind::Station => Station::schema(),
            RecordKind::Contact => Contact::schema(),
            RecordKind::CrewMember => CrewMember::schema(),
            RecordKind::Mission => Mission::schema(),
        }
    }

    /// Run the full validation pipeline for this kind, discarding the
    /// constructed record.
    pub fn check(&self, document: &Value) -> ValidationResult<()> {
        match self {
            RecordKind::Station => Station::from_document(document).map(|_| ()),
            RecordKind::Contact => Contact::from_document(document).map(|_| ()),
            RecordKind::CrewMember => CrewMember::from_document(document).map(|_| ()),
            RecordKind::Mission => Mission::from_document(document).map(|_| ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_match_schema_names() {
        for kind in [
            RecordKind::Station,
            RecordKind::Contact,
            RecordKind::CrewMember,
            RecordKind::Mission,
        ] {
            assert_eq!(kind.name(), kind.schema().name);
        }
    }

    #[test]
    fn test_kind_check_dispatches() {
        let member = json!({
            "member_id": "CM001",
            "name": "Sarah Connor",
            "rank": "COMMANDER",
            "age": 45,
            "specialization": "Mission Command",
            "years_experience": 20
        });
        assert!(RecordKind::CrewMember.check(&member).is_ok());
        assert!(RecordKind::Station.check(&member).is_err());
    }

    #[test]
    fn test_strip_nulls_recurses() {
        let mut doc = json!({
            "a": null,
            "b": { "c": null, "d": 1 },
            "e": [ { "f": null, "g": 2 }, 3 ]
        });
        strip_nulls(&mut doc);
        assert_eq!(doc, json!({ "b": { "d": 1 }, "e": [ { "g": 2 }, 3 ] }));
    }
}
