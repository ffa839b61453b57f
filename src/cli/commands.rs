//! CLI command implementations
//!
//! Commands are thin: they load configuration, call into the library, and
//! shape the response. No validation semantics live here.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::export::{write_all_datasets, DatasetCounts};
use crate::generator::GeneratorConfig;
use crate::observability::Logger;
use crate::records::RecordKind;

use super::args::{Command, RecordArg};
use super::errors::{CliError, CliResult};
use super::io::{read_documents, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    if let Err(error) = run_command(cli.command) {
        // Scripted consumers get a JSON envelope even on failure.
        let _ = write_error(error.code_str(), error.message());
        return Err(error);
    }
    Ok(())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Generate { config, out_dir, seed, stations, contacts, missions } => {
            let counts = DatasetCounts { stations, contacts, missions };
            generate(config.as_deref(), &out_dir, seed, counts)
        }
        Command::Validate { record, file } => validate(record, file.as_deref()),
        Command::Demo => demo(),
    }
}

/// Load the generation configuration, apply overrides, and check it.
fn load_generator_config(path: Option<&Path>, seed: Option<u64>) -> CliResult<GeneratorConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }

    if config.date_range_days < 1 {
        return Err(CliError::config_error("date_range_days must be >= 1"));
    }

    Ok(config)
}

/// Generate the requested datasets and write them under `out_dir`.
pub fn generate(
    config_path: Option<&Path>,
    out_dir: &Path,
    seed: Option<u64>,
    counts: DatasetCounts,
) -> CliResult<()> {
    let config = load_generator_config(config_path, seed)?;
    let written = write_all_datasets(&config, out_dir, counts)?;

    let directory = out_dir.display().to_string();
    let file_count = written.len().to_string();
    let seed_text = config.seed.to_string();
    Logger::info(
        "DATASETS_EXPORTED",
        &[
            ("directory", directory.as_str()),
            ("files", file_count.as_str()),
            ("seed", seed_text.as_str()),
        ],
    );

    let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    write_response(json!({ "directory": directory, "files": files }))?;
    Ok(())
}

/// Validate documents of one record kind, reporting per-document results.
///
/// Invalid documents are part of the normal output, not a process
/// failure: the command only errors when the input cannot be read.
pub fn validate(record: RecordArg, file: Option<&Path>) -> CliResult<()> {
    let kind = record.kind();
    let documents = read_documents(file)?;

    let mut results = Vec::with_capacity(documents.len());
    let mut invalid = 0usize;
    for (index, document) in documents.iter().enumerate() {
        match kind.check(document) {
            Ok(()) => results.push(json!({ "index": index, "valid": true })),
            Err(error) => {
                invalid += 1;
                let violations = serde_json::to_value(error.violations())?;
                results.push(json!({
                    "index": index,
                    "valid": false,
                    "violations": violations,
                }));
            }
        }
    }

    let total = documents.len().to_string();
    let invalid_text = invalid.to_string();
    let fields = [
        ("documents", total.as_str()),
        ("invalid", invalid_text.as_str()),
        ("record", kind.name()),
    ];
    if invalid == 0 {
        Logger::info("VALIDATION_COMPLETE", &fields);
    } else {
        Logger::warn("VALIDATION_COMPLETE", &fields);
    }

    write_response(json!({
        "record": kind.name(),
        "documents": documents.len(),
        "invalid": invalid,
        "results": results,
    }))?;
    Ok(())
}

/// Walk through built-in example documents, valid and invalid.
pub fn demo() -> CliResult<()> {
    let sections = vec![
        demo_section(
            "Space Station Data Validation",
            RecordKind::Station,
            vec![
                ("valid station", valid_station_document()),
                ("over-capacity station", over_capacity_station_document()),
            ],
        ),
        demo_section(
            "Alien Contact Log Validation",
            RecordKind::Contact,
            vec![
                ("valid radio contact", valid_contact_document()),
                (
                    "under-witnessed telepathic contact",
                    under_witnessed_contact_document(),
                ),
            ],
        ),
        demo_section(
            "Space Mission Crew Validation",
            RecordKind::Mission,
            vec![
                ("valid Mars mission", valid_mission_document()),
                ("leaderless Moon mission", leaderless_mission_document()),
            ],
        ),
    ];

    write_response(json!({ "sections": sections }))?;
    Ok(())
}

fn demo_section(name: &str, kind: RecordKind, documents: Vec<(&'static str, Value)>) -> Value {
    Logger::info("DEMO_SECTION", &[("section", name)]);

    let entries: Vec<Value> = documents
        .into_iter()
        .map(|(label, document)| match kind.check(&document) {
            Ok(()) => json!({ "label": label, "valid": true }),
            Err(error) => {
                let violations: Vec<String> =
                    error.violations().iter().map(|v| v.to_string()).collect();
                json!({ "label": label, "valid": false, "violations": violations })
            }
        })
        .collect();

    json!({ "section": name, "record": kind.name(), "entries": entries })
}

fn valid_station_document() -> Value {
    json!({
        "station_id": "ISS001",
        "name": "International Space Station",
        "crew_size": 6,
        "power_level": 85.5,
        "oxygen_level": 92.3,
        "last_maintenance": "2024-01-15T10:30:00",
        "is_operational": true
    })
}

fn over_capacity_station_document() -> Value {
    let mut document = valid_station_document();
    document["crew_size"] = json!(25);
    document
}

fn valid_contact_document() -> Value {
    json!({
        "contact_id": "AC_2024_001",
        "timestamp": "2024-01-15T22:30:00",
        "location": "Area 51, Nevada",
        "contact_type": "RADIO",
        "signal_strength": 8.5,
        "duration_minutes": 45,
        "witness_count": 5,
        "message_received": "Greetings from Zeta Reticuli",
        "is_verified": true
    })
}

fn under_witnessed_contact_document() -> Value {
    let mut document = valid_contact_document();
    document["contact_type"] = json!("TELEPATHIC");
    document["witness_count"] = json!(2);
    document
}

fn valid_mission_document() -> Value {
    json!({
        "mission_id": "M2024_MARS",
        "mission_name": "Mars Colony Establishment",
        "destination": "Mars",
        "launch_date": "2024-06-01T10:00:00",
        "duration_days": 900,
        "budget_millions": 2500.0,
        "crew": [
            {
                "member_id": "CM001",
                "name": "Sarah Connor",
                "rank": "COMMANDER",
                "age": 45,
                "specialization": "Mission Command",
                "years_experience": 20,
                "is_active": true
            },
            {
                "member_id": "CM002",
                "name": "John Smith",
                "rank": "LIEUTENANT",
                "age": 38,
                "specialization": "Navigation",
                "years_experience": 12,
                "is_active": true
            },
            {
                "member_id": "CM003",
                "name": "Alice Johnson",
                "rank": "OFFICER",
                "age": 32,
                "specialization": "Engineering",
                "years_experience": 8,
                "is_active": true
            }
        ]
    })
}

fn leaderless_mission_document() -> Value {
    json!({
        "mission_id": "M2024_MOON",
        "mission_name": "Moon Base Alpha",
        "destination": "Moon",
        "launch_date": "2024-08-01T10:00:00",
        "duration_days": 180,
        "budget_millions": 500.0,
        "crew": [
            {
                "member_id": "CM004",
                "name": "Bob Williams",
                "rank": "OFFICER",
                "age": 30,
                "specialization": "Engineering",
                "years_experience": 5,
                "is_active": true
            },
            {
                "member_id": "CM005",
                "name": "Jane Doe",
                "rank": "CADET",
                "age": 25,
                "specialization": "Research",
                "years_experience": 2,
                "is_active": true
            }
        ]
    })
}
