//! CLI argument definitions using clap
//!
//! Commands:
//! - cosmoval generate [--config <path>] [--out-dir <dir>] [--seed <n>]
//!     [--stations <n>] [--contacts <n>] [--missions <n>]
//! - cosmoval validate --record <kind> [--file <path>]
//! - cosmoval demo

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::export::{CONTACT_COUNT, MISSION_COUNT, STATION_COUNT};
use crate::records::RecordKind;

/// cosmoval - A strict, deterministic validator and dataset toolkit for
/// space-observatory records
#[derive(Parser, Debug)]
#[command(name = "cosmoval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the standard datasets and write them to disk
    Generate {
        /// Path to a generation configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for dataset files
        #[arg(long, default_value = "generated_data")]
        out_dir: PathBuf,

        /// RNG seed, overriding the configuration file
        #[arg(long)]
        seed: Option<u64>,

        /// Number of station documents
        #[arg(long, default_value_t = STATION_COUNT)]
        stations: usize,

        /// Number of contact documents
        #[arg(long, default_value_t = CONTACT_COUNT)]
        contacts: usize,

        /// Number of mission documents
        #[arg(long, default_value_t = MISSION_COUNT)]
        missions: usize,
    },

    /// Validate JSON documents against one record kind
    Validate {
        /// Record kind the documents claim to be
        #[arg(long, value_enum)]
        record: RecordArg,

        /// File holding one document or an array of documents; stdin when absent
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Walk through built-in example documents, valid and invalid
    Demo,
}

/// Record kinds addressable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordArg {
    Station,
    Contact,
    CrewMember,
    Mission,
}

impl RecordArg {
    /// The record kind this argument selects.
    pub fn kind(self) -> RecordKind {
        match self {
            RecordArg::Station => RecordKind::Station,
            RecordArg::Contact => RecordKind::Contact,
            RecordArg::CrewMember => RecordKind::CrewMember,
            RecordArg::Mission => RecordKind::Mission,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
