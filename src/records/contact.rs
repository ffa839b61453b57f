//! Contact-event reports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate_document, CrossValidate};
use crate::constraint::{FieldConstraint, RecordSchema, ValidationResult, Violation};
use crate::timestamp::Timestamp;

/// How a contact event was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactType {
    Radio,
    Visual,
    Physical,
    Telepathic,
}

impl ContactType {
    /// Allowed wire values, in declaration order.
    pub const ALLOWED: &'static [&'static str] = &["RADIO", "VISUAL", "PHYSICAL", "TELEPATHIC"];

    /// The wire form of this contact type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Radio => "RADIO",
            ContactType::Visual => "VISUAL",
            ContactType::Physical => "PHYSICAL",
            ContactType::Telepathic => "TELEPATHIC",
        }
    }
}

/// A contact-event report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    contact_id: String,
    timestamp: Timestamp,
    location: String,
    contact_type: ContactType,
    signal_strength: f64,
    duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_received: Option<String>,
    witness_count: i64,
    #[serde(default)]
    is_verified: bool,
}

impl Contact {
    /// Field constraints for contact documents.
    pub fn schema() -> RecordSchema {
        RecordSchema::new(
            "contact",
            vec![
                ("contact_id", FieldConstraint::text(5, 15)),
                ("timestamp", FieldConstraint::timestamp()),
                ("location", FieldConstraint::text(3, 100)),
                ("contact_type", FieldConstraint::enumeration(ContactType::ALLOWED)),
                ("signal_strength", FieldConstraint::float(0.0, 10.0)),
                ("duration_minutes", FieldConstraint::int(1, 1440)),
                ("message_received", FieldConstraint::text_max(500).optional()),
                ("witness_count", FieldConstraint::int(1, 100)),
                ("is_verified", FieldConstraint::boolean().optional()),
            ],
        )
    }

    /// Validate a raw document and construct the contact record.
    pub fn from_document(document: &Value) -> ValidationResult<Self> {
        validate_document(&Self::schema(), document)
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn signal_strength(&self) -> f64 {
        self.signal_strength
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn message_received(&self) -> Option<&str> {
        self.message_received.as_deref()
    }

    pub fn witness_count(&self) -> i64 {
        self.witness_count
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }
}

impl CrossValidate for Contact {
    fn cross_validate(&self) -> Result<(), Violation> {
        if !self.contact_id.starts_with("AC") {
            return Err(Violation::cross_field(
                "contact_id",
                "id_prefix",
                format!(
                    "invalid identifier prefix: must start with \"AC\" (got {:?})",
                    self.contact_id
                ),
            ));
        }
        // Demanded for every contact type, not only physical encounters.
        if !self.is_verified {
            return Err(Violation::cross_field(
                "is_verified",
                "verification",
                "unverified contact report",
            ));
        }
        match self.contact_type {
            ContactType::Telepathic => {
                if self.witness_count < 3 {
                    return Err(Violation::cross_field(
                        "witness_count",
                        "telepathic_witnesses",
                        format!(
                            "insufficient witnesses for telepathic contact (need 3, got {})",
                            self.witness_count
                        ),
                    ));
                }
            }
            ContactType::Radio | ContactType::Visual | ContactType::Physical => {}
        }
        if self.signal_strength > 7.0 && self.message_received.is_none() {
            return Err(Violation::cross_field(
                "message_received",
                "strong_signal_message",
                format!(
                    "strong signal without recorded message (signal {})",
                    self.signal_strength
                ),
            ));
        }
        Ok(())
    }
}
