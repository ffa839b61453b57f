//! Structured logging.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use cosmoval::observability::Logger;
//!
//! Logger::info("VALIDATION_COMPLETE", &[("valid", "10"), ("invalid", "2")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
