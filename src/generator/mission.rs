//! Synthetic missions and their crew rosters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::{round1, GeneratorConfig};
use crate::records::Rank;
use crate::timestamp::Timestamp;

const FIRST_NAMES: &[&str] = &[
    "James", "Sarah", "John", "Emily", "Michael", "Jessica", "David", "Ashley", "Robert", "Maria",
    "William", "Jennifer", "Richard", "Linda", "Carlos", "Elena",
];

const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Martinez",
    "Davis",
    "Rodriguez",
    "Wilson",
    "Anderson",
    "Taylor",
    "Chen",
    "Hernandez",
];

const SPECIALIZATIONS: &[&str] = &[
    "Navigation",
    "Engineering",
    "Research",
    "Medical",
    "Communications",
    "Pilot",
    "Geology",
    "Biology",
    "Physics",
    "Robotics",
    "Life Support",
    "Systems Analysis",
];

const DESTINATIONS: &[&str] = &[
    "Mars",
    "Luna",
    "Europa",
    "Titan",
    "Asteroid Belt",
    "Venus Orbit",
    "Jupiter Orbit",
    "Saturn Rings",
    "Solar Observatory",
];

const MISSION_TAGS: &[&str] = &["MARS", "LUNA", "EUROPA", "TITAN"];

/// Experience bonus per rank, parallel to `Rank::ALLOWED`.
const RANK_BONUS: &[i64] = &[0, 2, 5, 8, 12];

/// Deterministic producer of mission documents with embedded rosters.
pub struct MissionGenerator {
    rng: StdRng,
    base_date: Timestamp,
}

impl MissionGenerator {
    /// Keeps this generator's stream independent of the other kinds.
    const SEED_OFFSET: u64 = 2;

    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed.wrapping_add(Self::SEED_OFFSET)),
            base_date: config.base_date,
        }
    }

    /// Produce `count` mission documents, each one passing mission
    /// validation.
    pub fn generate(&mut self, count: usize) -> Vec<Value> {
        (0..count).map(|index| self.generate_one(index)).collect()
    }

    fn generate_one(&mut self, index: usize) -> Value {
        let tag = MISSION_TAGS[self.rng.gen_range(0..MISSION_TAGS.len())];
        let mission_id = format!("M{}_{tag}", self.base_date.year());
        let destination = DESTINATIONS[self.rng.gen_range(0..DESTINATIONS.len())];
        let flavor = if self.rng.gen_bool(0.5) {
            "Colony"
        } else {
            "Research"
        };
        let mission_name = format!("{destination} {flavor} Mission");
        let launch_date = self.base_date.plus_days(self.rng.gen_range(30..=300));
        let duration_days: i64 = self.rng.gen_range(90..=1200);
        let budget_millions = round1(self.rng.gen_range(500.0..=5000.0));

        let crew_size: usize = self.rng.gen_range(3..=8);
        let mut crew = Vec::with_capacity(crew_size);
        for position in 0..crew_size {
            let member_id = format!("CM{:03}", index * 10 + position + 1);
            let mut member = self.generate_crew_member(&member_id);
            // The roster leads with a command rank.
            if position == 0 {
                let command = if self.rng.gen_bool(0.5) {
                    "CAPTAIN"
                } else {
                    "COMMANDER"
                };
                member["rank"] = json!(command);
            }
            crew.push(member);
        }
        if duration_days > 365 {
            self.boost_experience(&mut crew);
        }

        json!({
            "mission_id": mission_id,
            "mission_name": mission_name,
            "destination": destination,
            "launch_date": launch_date.to_iso8601(),
            "duration_days": duration_days,
            "crew": crew,
            "mission_status": "planned",
            "budget_millions": budget_millions,
        })
    }

    fn generate_crew_member(&mut self, member_id: &str) -> Value {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        let rank_index = self.rng.gen_range(0..Rank::ALLOWED.len());
        let age: i64 = self.rng.gen_range(25..=55);
        let specialization = SPECIALIZATIONS[self.rng.gen_range(0..SPECIALIZATIONS.len())];
        // Experience tracks age and rank, with a little noise.
        let base_experience = (age - 22).max(0);
        let years_experience =
            (base_experience + RANK_BONUS[rank_index] + self.rng.gen_range(-2..=3)).clamp(0, 30);

        json!({
            "member_id": member_id,
            "name": format!("{first} {last}"),
            "rank": Rank::ALLOWED[rank_index],
            "age": age,
            "specialization": specialization,
            "years_experience": years_experience,
            "is_active": true,
        })
    }

    /// Raise roster experience until a long mission holds its staffing
    /// rule: twice the count of members with more than five years must
    /// reach the roster size.
    fn boost_experience(&mut self, crew: &mut [Value]) {
        let needed = (crew.len() + 1) / 2;
        let mut experienced = crew.iter().filter(|m| experience_of(m) > 5).count();
        for member in crew.iter_mut() {
            if experienced >= needed {
                break;
            }
            if experience_of(member) <= 5 {
                member["years_experience"] = json!(self.rng.gen_range(6..=15));
                experienced += 1;
            }
        }
    }
}

fn experience_of(member: &Value) -> i64 {
    member["years_experience"].as_i64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordKind;

    #[test]
    fn test_same_seed_same_output() {
        let config = GeneratorConfig::default();
        let first = MissionGenerator::new(&config).generate(5);
        let second = MissionGenerator::new(&config).generate(5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_documents_validate() {
        let config = GeneratorConfig::default();
        let documents = MissionGenerator::new(&config).generate(20);
        assert_eq!(documents.len(), 20);
        for document in &documents {
            RecordKind::Mission.check(document).unwrap();
        }
    }

    #[test]
    fn test_roster_leads_with_command_rank() {
        let config = GeneratorConfig::default();
        let documents = MissionGenerator::new(&config).generate(10);
        for document in &documents {
            let lead_rank = document["crew"][0]["rank"].as_str().unwrap();
            assert!(lead_rank == "CAPTAIN" || lead_rank == "COMMANDER");
        }
    }

    #[test]
    fn test_long_missions_meet_experience_rule() {
        let config = GeneratorConfig::default();
        let documents = MissionGenerator::new(&config).generate(30);
        for document in &documents {
            if document["duration_days"].as_i64().unwrap() <= 365 {
                continue;
            }
            let crew = document["crew"].as_array().unwrap();
            let experienced = crew.iter().filter(|m| experience_of(m) > 5).count();
            assert!(experienced * 2 >= crew.len());
        }
    }

    #[test]
    fn test_member_identifiers_encode_mission_and_position() {
        let config = GeneratorConfig::default();
        let documents = MissionGenerator::new(&config).generate(2);
        assert_eq!(documents[0]["crew"][0]["member_id"], json!("CM001"));
        assert_eq!(documents[1]["crew"][0]["member_id"], json!("CM011"));
    }

    #[test]
    fn test_experience_stays_in_bounds() {
        let config = GeneratorConfig::default();
        let documents = MissionGenerator::new(&config).generate(30);
        for document in &documents {
            for member in document["crew"].as_array().unwrap() {
                let years = experience_of(member);
                assert!((0..=30).contains(&years));
            }
        }
    }
}
