//! Generation parameters.

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

fn default_seed() -> u64 {
    42
}

fn default_base_date() -> Timestamp {
    Timestamp::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap_or_else(Timestamp::unix_epoch)
}

fn default_date_range_days() -> i64 {
    365
}

/// Parameters shared by all dataset generators.
///
/// The same configuration always yields byte-identical datasets. Each
/// generator derives its own RNG from the seed with a fixed offset, so the
/// three dataset kinds stay independent of one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root RNG seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Reference date events are placed around.
    #[serde(default = "default_base_date")]
    pub base_date: Timestamp,
    /// Width of the event window, in days after the base date.
    #[serde(default = "default_date_range_days")]
    pub date_range_days: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            base_date: default_base_date(),
            date_range_days: default_date_range_days(),
        }
    }
}
