//! Mission records with embedded crew rosters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate_document, CrewMember, CrossValidate};
use crate::constraint::{FieldConstraint, RecordSchema, ValidationResult, Violation};
use crate::timestamp::Timestamp;

fn default_status() -> String {
    "planned".to_string()
}

/// A mission and the crew flying it.
///
/// The mission owns its crew: members are embedded documents with no
/// identity outside the mission, and every member is field-validated
/// before any mission-level rule runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    mission_id: String,
    mission_name: String,
    destination: String,
    launch_date: Timestamp,
    duration_days: i64,
    #[serde(default)]
    crew: Vec<CrewMember>,
    #[serde(default = "default_status")]
    mission_status: String,
    budget_millions: f64,
}

impl Mission {
    /// Field constraints for mission documents.
    ///
    /// The crew list is optional with a default of no members, so an
    /// absent list bypasses the length bound while an explicitly supplied
    /// empty list fails it.
    pub fn schema() -> RecordSchema {
        RecordSchema::new(
            "mission",
            vec![
                ("mission_id", FieldConstraint::text(5, 15)),
                ("mission_name", FieldConstraint::text(3, 100)),
                ("destination", FieldConstraint::text(3, 50)),
                ("launch_date", FieldConstraint::timestamp()),
                ("duration_days", FieldConstraint::int(1, 3650)),
                (
                    "crew",
                    FieldConstraint::record_list(CrewMember::schema(), 1, 12).optional(),
                ),
                ("mission_status", FieldConstraint::free_text().optional()),
                ("budget_millions", FieldConstraint::float(1.0, 10000.0)),
            ],
        )
    }

    /// Validate a raw document and construct the mission record.
    pub fn from_document(document: &Value) -> ValidationResult<Self> {
        validate_document(&Self::schema(), document)
    }

    pub fn mission_id(&self) -> &str {
        &self.mission_id
    }

    pub fn mission_name(&self) -> &str {
        &self.mission_name
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn launch_date(&self) -> Timestamp {
        self.launch_date
    }

    pub fn duration_days(&self) -> i64 {
        self.duration_days
    }

    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    pub fn mission_status(&self) -> &str {
        &self.mission_status
    }

    pub fn budget_millions(&self) -> f64 {
        self.budget_millions
    }
}

impl CrossValidate for Mission {
    fn cross_validate(&self) -> Result<(), Violation> {
        if !self.mission_id.starts_with("M") {
            return Err(Violation::cross_field(
                "mission_id",
                "id_prefix",
                format!(
                    "invalid identifier prefix: must start with \"M\" (got {:?})",
                    self.mission_id
                ),
            ));
        }
        // An empty roster is vacuously commanded; the rule only judges
        // rosters with members.
        if !self.crew.is_empty() && !self.crew.iter().any(|member| member.rank().is_command()) {
            return Err(Violation::cross_field(
                "crew",
                "command_rank",
                "missing command rank: no COMMANDER or CAPTAIN aboard",
            ));
        }
        if self.duration_days > 365 {
            let experienced = self
                .crew
                .iter()
                .filter(|member| member.years_experience() > 5)
                .count();
            if experienced * 2 < self.crew.len() {
                return Err(Violation::cross_field(
                    "crew",
                    "experienced_crew",
                    format!(
                        "insufficient experienced crew for long mission ({experienced} of {} with more than 5 years)",
                        self.crew.len()
                    ),
                ));
            }
        }
        if let Some(index) = self.crew.iter().position(|member| !member.is_active()) {
            return Err(Violation::cross_field(
                format!("crew.{index}.is_active"),
                "active_crew",
                "inactive crew member present",
            ));
        }
        Ok(())
    }
}
