//! Synthetic contact reports.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::{round1, GeneratorConfig};
use crate::records::ContactType;
use crate::timestamp::Timestamp;

const LOCATIONS: &[&str] = &[
    "Area 51, Nevada",
    "Roswell, New Mexico",
    "Arecibo Observatory, Puerto Rico",
    "Atacama Desert, Chile",
    "Siberian Tundra, Russia",
    "Outback, Australia",
    "Bermuda Triangle",
    "Mount Shasta, California",
    "Very Large Array, New Mexico",
];

const MESSAGES: &[&str] = &[
    "Greetings from Zeta Reticuli",
    "We come in peace",
    "Your planet is beautiful",
    "Take us to your leader",
    "We have been watching",
    "Prepare for first contact",
];

/// Deterministic producer of contact report documents.
pub struct ContactGenerator {
    rng: StdRng,
    base_date: Timestamp,
    date_range_days: i64,
}

impl ContactGenerator {
    /// Keeps this generator's stream independent of the other kinds.
    const SEED_OFFSET: u64 = 1;

    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed.wrapping_add(Self::SEED_OFFSET)),
            base_date: config.base_date,
            date_range_days: config.date_range_days.max(0),
        }
    }

    /// Produce `count` report documents, each one passing contact
    /// validation.
    pub fn generate(&mut self, count: usize) -> Vec<Value> {
        (0..count).map(|index| self.generate_one(index)).collect()
    }

    fn generate_one(&mut self, index: usize) -> Value {
        let contact_id = format!("AC_{}_{:03}", self.base_date.year(), index + 1);
        let timestamp = self
            .base_date
            .plus_days(self.rng.gen_range(0..=self.date_range_days));
        let location = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
        let contact_type = ContactType::ALLOWED[self.rng.gen_range(0..ContactType::ALLOWED.len())];
        let signal_strength = round1(self.rng.gen_range(1.0..=10.0));
        let duration_minutes: i64 = self.rng.gen_range(5..=240);

        // Telepathic contact needs at least three witnesses to count.
        let mut witness_count: i64 = self.rng.gen_range(1..=15);
        if contact_type == "TELEPATHIC" && witness_count < 3 {
            witness_count = self.rng.gen_range(3..=8);
        }

        // A strong signal always carries its message; a moderate one
        // usually does.
        let message_received = if signal_strength > 7.0 {
            Some(MESSAGES[self.rng.gen_range(0..MESSAGES.len())])
        } else if signal_strength > 6.0 && self.rng.gen_bool(0.7) {
            Some(MESSAGES[self.rng.gen_range(0..MESSAGES.len())])
        } else {
            None
        };

        json!({
            "contact_id": contact_id,
            "timestamp": timestamp.to_iso8601(),
            "location": location,
            "contact_type": contact_type,
            "signal_strength": signal_strength,
            "duration_minutes": duration_minutes,
            "witness_count": witness_count,
            "message_received": message_received,
            "is_verified": true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordKind;

    #[test]
    fn test_same_seed_same_output() {
        let config = GeneratorConfig::default();
        let first = ContactGenerator::new(&config).generate(10);
        let second = ContactGenerator::new(&config).generate(10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_documents_validate() {
        let config = GeneratorConfig::default();
        let documents = ContactGenerator::new(&config).generate(40);
        assert_eq!(documents.len(), 40);
        for document in &documents {
            RecordKind::Contact.check(document).unwrap();
        }
    }

    #[test]
    fn test_identifiers_are_sequential() {
        let config = GeneratorConfig::default();
        let documents = ContactGenerator::new(&config).generate(3);
        assert_eq!(documents[0]["contact_id"], json!("AC_2024_001"));
        assert_eq!(documents[1]["contact_id"], json!("AC_2024_002"));
        assert_eq!(documents[2]["contact_id"], json!("AC_2024_003"));
    }

    #[test]
    fn test_telepathic_reports_have_enough_witnesses() {
        let config = GeneratorConfig::default();
        let documents = ContactGenerator::new(&config).generate(60);
        for document in &documents {
            if document["contact_type"] == json!("TELEPATHIC") {
                assert!(document["witness_count"].as_i64().unwrap() >= 3);
            }
        }
    }

    #[test]
    fn test_strong_signals_carry_messages() {
        let config = GeneratorConfig::default();
        let documents = ContactGenerator::new(&config).generate(60);
        for document in &documents {
            if document["signal_strength"].as_f64().unwrap() > 7.0 {
                assert!(document["message_received"].is_string());
            }
        }
    }

    #[test]
    fn test_timestamps_stay_inside_the_window() {
        let config = GeneratorConfig {
            date_range_days: 10,
            ..GeneratorConfig::default()
        };
        let documents = ContactGenerator::new(&config).generate(20);
        let end = config.base_date.plus_days(10);
        for document in &documents {
            let raw = document["timestamp"].as_str().unwrap();
            let parsed = Timestamp::parse(raw).unwrap();
            assert!(parsed >= config.base_date && parsed <= end);
        }
    }
}
