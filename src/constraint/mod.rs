//! Field-constraint engine for observatory records.
//!
//! # Design Principles
//!
//! - Constraints are explicit descriptor values, interpreted by one
//!   generic checker
//! - All declared fields are checked; reports are complete, not first-only
//! - Declaration order drives report order, so output is deterministic
//! - All numeric and length bounds are inclusive
//! - Checking never mutates the document and performs no I/O

mod engine;
mod types;
mod violation;

pub use engine::check_document;
pub use types::{FieldConstraint, FieldType, RecordSchema};
pub use violation::{ValidationError, ValidationResult, Violation, ViolationKind};
