//! Violation reporting for record validation.
//!
//! A validation attempt either yields the constructed record or a
//! [`ValidationError`] carrying a non-empty, ordered violation list. There
//! is no partial-success state: a record exists fully valid or not at all.

use serde::Serialize;
use std::fmt;

/// The failure classes a validation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A single field failed its type/range/length/enum/required constraint.
    Field,
    /// A record-level rule failed after every field was individually valid.
    CrossField,
    /// An embedded sub-record failed field validation inside its parent.
    Nested,
}

/// One violated constraint or rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    kind: ViolationKind,
    path: String,
    rule: &'static str,
    message: String,
}

impl Violation {
    /// Create a violation with an explicit kind.
    pub fn new(
        kind: ViolationKind,
        path: impl Into<String>,
        rule: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            rule,
            message: message.into(),
        }
    }

    /// A field-constraint violation.
    pub fn field(path: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Field, path, rule, message)
    }

    /// A record-level rule violation.
    pub fn cross_field(
        path: impl Into<String>,
        rule: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ViolationKind::CrossField, path, rule, message)
    }

    /// A sub-record violation inside a containing list.
    pub fn nested(path: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Nested, path, rule, message)
    }

    /// Which failure class this violation belongs to.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Dotted field path; list elements are indexed (`crew.1.age`).
    /// Empty for violations against the record root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Short identifier of the rule that failed (e.g. `max`, `command_rank`).
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            self.path.as_str()
        };
        write!(f, "{}: {} [{}]", path, self.message, self.rule)
    }
}

/// A failed validation attempt: the record kind plus every violation found,
/// in deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    record: &'static str,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wrap a non-empty violation list for the named record kind.
    pub fn new(record: &'static str, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "a validation error carries at least one violation");
        Self { record, violations }
    }

    /// The record kind the document was checked against.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// The violations, in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false: a validation error carries at least one violation.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consume the error, returning the violation list.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation failed for {} record ({} violation{})",
            self.record,
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation attempts.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_includes_path_and_rule() {
        let v = Violation::field("crew_size", "max", "must be <= 20 (got 25)");
        let rendered = v.to_string();
        assert!(rendered.contains("crew_size"));
        assert!(rendered.contains("must be <= 20"));
        assert!(rendered.contains("[max]"));
    }

    #[test]
    fn test_root_path_renders_placeholder() {
        let v = Violation::field("", "type", "expected object, got array");
        assert!(v.to_string().starts_with("(root):"));
    }

    #[test]
    fn test_error_display_one_line_per_violation() {
        let err = ValidationError::new(
            "station",
            vec![
                Violation::field("station_id", "min_length", "length must be >= 3 characters (got 2)"),
                Violation::field("crew_size", "min", "must be >= 1 (got 0)"),
            ],
        );
        let rendered = err.to_string();
        assert!(rendered.starts_with("validation failed for station record (2 violations)"));
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("  station_id:"));
        assert!(rendered.contains("  crew_size:"));
    }

    #[test]
    fn test_singular_violation_count() {
        let err = ValidationError::new(
            "contact",
            vec![Violation::cross_field("is_verified", "verification", "unverified contact report")],
        );
        assert!(err.to_string().contains("(1 violation)"));
        assert_eq!(err.len(), 1);
        assert!(!err.is_empty());
    }

    #[test]
    fn test_into_violations_preserves_order() {
        let violations = vec![
            Violation::field("a", "min", "must be >= 1 (got 0)"),
            Violation::nested("crew.1.age", "max", "must be <= 80 (got 90)"),
        ];
        let err = ValidationError::new("mission", violations.clone());
        assert_eq!(err.into_violations(), violations);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let v = Violation::nested("crew.0.rank", "enum", "must be one of [CADET] (got \"x\")");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "nested");
        assert_eq!(json["path"], "crew.0.rank");
    }
}
