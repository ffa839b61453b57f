//! Deterministic synthetic datasets.
//!
//! Generators produce raw documents, never typed records: their output is
//! the validator's input boundary, and every produced document passes its
//! record kind's full validation. The [`scenarios`] module holds the
//! deliberately broken documents.

mod config;
mod contact;
mod mission;
mod station;
pub mod scenarios;

pub use config::GeneratorConfig;
pub use contact::ContactGenerator;
pub use mission::MissionGenerator;
pub use station::StationGenerator;

/// Round to one decimal place, the precision telemetry readings use.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(85.4999), 85.5);
        assert_eq!(round1(70.04), 70.0);
        assert_eq!(round1(98.5), 98.5);
    }
}
