//! Synthetic station telemetry.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::{round1, GeneratorConfig};
use crate::timestamp::Timestamp;

const STATION_NAMES: &[&str] = &[
    "International Space Station",
    "Lunar Gateway",
    "Mars Orbital Platform",
    "Europa Research Station",
    "Titan Mining Outpost",
    "Asteroid Belt Relay",
    "Deep Space Observatory",
    "Solar Wind Monitor",
    "Quantum Communications Hub",
];

const STATION_PREFIXES: &[&str] = &["ISS", "LGW", "MOP", "ERS", "TMO", "ABR", "DSO", "SWM", "QCH"];

/// Deterministic producer of station telemetry documents.
pub struct StationGenerator {
    rng: StdRng,
    base_date: Timestamp,
}

impl StationGenerator {
    /// Keeps this generator's stream independent of the other kinds.
    const SEED_OFFSET: u64 = 0;

    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed.wrapping_add(Self::SEED_OFFSET)),
            base_date: config.base_date,
        }
    }

    /// Produce `count` telemetry documents, each one passing station
    /// validation.
    pub fn generate(&mut self, count: usize) -> Vec<Value> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    fn generate_one(&mut self) -> Value {
        let prefix = STATION_PREFIXES[self.rng.gen_range(0..STATION_PREFIXES.len())];
        let station_id = format!("{prefix}{}", self.rng.gen_range(100..=999));
        let name = STATION_NAMES[self.rng.gen_range(0..STATION_NAMES.len())];
        let crew_size: i64 = self.rng.gen_range(3..=12);
        let power_level = round1(self.rng.gen_range(70.0..=98.5));
        let oxygen_level = round1(self.rng.gen_range(85.0..=99.2));
        let last_maintenance = self.base_date.minus_days(self.rng.gen_range(1..=180));
        // Operational status tracks system health.
        let is_operational = power_level > 75.0 && oxygen_level > 90.0;
        let notes = if !is_operational {
            Some("System diagnostics required")
        } else if self.rng.gen_bool(0.3) {
            Some("All systems nominal")
        } else {
            None
        };

        json!({
            "station_id": station_id,
            "name": name,
            "crew_size": crew_size,
            "power_level": power_level,
            "oxygen_level": oxygen_level,
            "last_maintenance": last_maintenance.to_iso8601(),
            "is_operational": is_operational,
            "notes": notes,
        })
    }
}
