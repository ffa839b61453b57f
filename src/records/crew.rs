//! Crew-member records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate_document, CrossValidate};
use crate::constraint::{FieldConstraint, RecordSchema, ValidationResult};

fn default_true() -> bool {
    true
}

/// Crew rank ladder, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Cadet,
    Officer,
    Lieutenant,
    Captain,
    Commander,
}

impl Rank {
    /// Allowed wire values, in ladder order.
    pub const ALLOWED: &'static [&'static str] =
        &["CADET", "OFFICER", "LIEUTENANT", "CAPTAIN", "COMMANDER"];

    /// The wire form of this rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Cadet => "CADET",
            Rank::Officer => "OFFICER",
            Rank::Lieutenant => "LIEUTENANT",
            Rank::Captain => "CAPTAIN",
            Rank::Commander => "COMMANDER",
        }
    }

    /// Whether this rank may command a mission.
    pub fn is_command(&self) -> bool {
        matches!(self, Rank::Captain | Rank::Commander)
    }
}

/// A mission crew member.
///
/// Crew members carry no record-level rules of their own; mission rules
/// judge the roster as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    member_id: String,
    name: String,
    rank: Rank,
    age: i64,
    specialization: String,
    years_experience: i64,
    #[serde(default = "default_true")]
    is_active: bool,
}

impl CrewMember {
    /// Field constraints for crew-member documents.
    pub fn schema() -> RecordSchema {
        RecordSchema::new(
            "crew_member",
            vec![
                ("member_id", FieldConstraint::text(3, 10)),
                ("name", FieldConstraint::text(2, 50)),
                ("rank", FieldConstraint::enumeration(Rank::ALLOWED)),
                ("age", FieldConstraint::int(18, 80)),
                ("specialization", FieldConstraint::text(3, 30)),
                ("years_experience", FieldConstraint::int(0, 50)),
                ("is_active", FieldConstraint::boolean().optional()),
            ],
        )
    }

    /// Validate a raw document and construct the crew-member record.
    pub fn from_document(document: &Value) -> ValidationResult<Self> {
        validate_document(&Self::schema(), document)
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn years_experience(&self) -> i64 {
        self.years_experience
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl CrossValidate for CrewMember {}
