//! Dataset export.
//!
//! Turns generated datasets into files under one output directory. Every
//! dataset gets a JSON file; the flat ones also get a CSV rendering via
//! [`flatten_document`].

mod errors;
mod flatten;
mod writer;

pub use errors::{ExportError, ExportResult};
pub use flatten::flatten_document;
pub use writer::Exporter;

use std::path::PathBuf;

use crate::generator::{
    scenarios, ContactGenerator, GeneratorConfig, MissionGenerator, StationGenerator,
};

/// Documents per dataset in a standard export.
pub const STATION_COUNT: usize = 10;
pub const CONTACT_COUNT: usize = 15;
pub const MISSION_COUNT: usize = 5;

/// How many documents of each kind an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub stations: usize,
    pub contacts: usize,
    pub missions: usize,
}

impl Default for DatasetCounts {
    fn default() -> Self {
        Self {
            stations: STATION_COUNT,
            contacts: CONTACT_COUNT,
            missions: MISSION_COUNT,
        }
    }
}

/// Generate every dataset and write it under `output_dir`.
///
/// Stations and contacts get JSON plus CSV; missions stay JSON-only since
/// their nested rosters do not fit a flat table. The two known-bad
/// scenario files round out the set. Paths come back in a fixed order.
pub fn write_all_datasets(
    config: &GeneratorConfig,
    output_dir: impl Into<PathBuf>,
    counts: DatasetCounts,
) -> ExportResult<Vec<PathBuf>> {
    let exporter = Exporter::new(output_dir)?;

    let stations = StationGenerator::new(config).generate(counts.stations);
    let contacts = ContactGenerator::new(config).generate(counts.contacts);
    let missions = MissionGenerator::new(config).generate(counts.missions);

    let mut written = Vec::new();
    written.push(exporter.write_json(&stations, "space_stations")?);
    written.push(exporter.write_csv(&stations, "space_stations")?);
    written.push(exporter.write_json(&contacts, "alien_contacts")?);
    written.push(exporter.write_csv(&contacts, "alien_contacts")?);
    written.push(exporter.write_json(&missions, "space_missions")?);
    written.push(exporter.write_json(&scenarios::invalid_stations(), "invalid_stations")?);
    written.push(exporter.write_json(&scenarios::invalid_contacts(), "invalid_contacts")?);
    Ok(written)
}
