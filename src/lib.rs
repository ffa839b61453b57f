//! cosmoval - A strict, deterministic validator and dataset toolkit for
//! space-observatory records
//!
//! Documents enter as raw JSON, pass per-field constraint checks, decode
//! into typed records, and finish with record-level rules. The generator
//! and export modules produce the datasets those records describe.

pub mod cli;
pub mod constraint;
pub mod export;
pub mod generator;
pub mod observability;
pub mod records;
pub mod timestamp;
