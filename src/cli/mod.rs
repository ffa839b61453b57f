//! CLI module
//!
//! Provides the command-line interface:
//! - generate: write the standard datasets to disk
//! - validate: check JSON documents against a record kind
//! - demo: walk through built-in example documents

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, RecordArg};
pub use commands::{demo, generate, run, run_command, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_documents, write_error, write_response};
