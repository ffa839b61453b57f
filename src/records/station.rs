//! Station telemetry records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate_document, CrossValidate};
use crate::constraint::{FieldConstraint, RecordSchema, ValidationResult};
use crate::timestamp::Timestamp;

fn default_true() -> bool {
    true
}

/// A space-station telemetry snapshot.
///
/// Operational status is a producer-side convention; no record-level rule
/// ties it to the power or oxygen readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    station_id: String,
    name: String,
    crew_size: i64,
    power_level: f64,
    oxygen_level: f64,
    last_maintenance: Timestamp,
    #[serde(default = "default_true")]
    is_operational: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Station {
    /// Field constraints for station documents.
    pub fn schema() -> RecordSchema {
        RecordSchema::new(
            "station",
            vec![
                ("station_id", FieldConstraint::text(3, 10)),
                ("name", FieldConstraint::text(1, 50)),
                ("crew_size", FieldConstraint::int(1, 20)),
                ("power_level", FieldConstraint::float(0.0, 100.0)),
                ("oxygen_level", FieldConstraint::float(0.0, 100.0)),
                ("last_maintenance", FieldConstraint::timestamp()),
                ("is_operational", FieldConstraint::boolean().optional()),
                ("notes", FieldConstraint::text_max(200).optional()),
            ],
        )
    }

    /// Validate a raw document and construct the station record.
    pub fn from_document(document: &Value) -> ValidationResult<Self> {
        validate_document(&Self::schema(), document)
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crew_size(&self) -> i64 {
        self.crew_size
    }

    pub fn power_level(&self) -> f64 {
        self.power_level
    }

    pub fn oxygen_level(&self) -> f64 {
        self.oxygen_level
    }

    pub fn last_maintenance(&self) -> Timestamp {
        self.last_maintenance
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl CrossValidate for Station {}
