//! Constraint descriptors for record schemas.
//!
//! A schema is an ordered list of named field constraints. Order matters:
//! the checker walks fields in declaration order, so violation reports are
//! reproducible across runs.

/// Supported field types, each carrying its own inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 text; bounds are character counts, not bytes.
    Text {
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
    /// 64-bit signed integer. Floats are not integers.
    Int { min: Option<i64>, max: Option<i64> },
    /// 64-bit floating point. Whole-number JSON integers are accepted.
    Float { min: Option<f64>, max: Option<f64> },
    /// Boolean.
    Bool,
    /// Timestamp string: RFC 3339 or the offset-less ISO-8601 form.
    Timestamp,
    /// Closed set of allowed string values, matched exactly (case-sensitive).
    Enum { allowed: &'static [&'static str] },
    /// Bounded list of sub-records, each checked against the nested schema.
    RecordList {
        schema: Box<RecordSchema>,
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text { .. } => "text",
            FieldType::Int { .. } => "int",
            FieldType::Float { .. } => "float",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
            FieldType::Enum { .. } => "enum",
            FieldType::RecordList { .. } => "list",
        }
    }
}

/// A single field's constraint: its type (with bounds) and whether the
/// field must be present.
///
/// Optional fields that are absent, or present as an explicit null, are
/// exempt from all checks. When an optional field carries a value it is
/// checked exactly like a required one.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    /// Field data type with inclusive bounds.
    pub field_type: FieldType,
    /// Whether the field must be present and non-null.
    pub required: bool,
}

impl FieldConstraint {
    /// Required text with character-count bounds.
    pub fn text(min_len: usize, max_len: usize) -> Self {
        Self {
            field_type: FieldType::Text {
                min_len: Some(min_len),
                max_len: Some(max_len),
            },
            required: true,
        }
    }

    /// Required text bounded above only.
    pub fn text_max(max_len: usize) -> Self {
        Self {
            field_type: FieldType::Text {
                min_len: None,
                max_len: Some(max_len),
            },
            required: true,
        }
    }

    /// Required text with no length bounds.
    pub fn free_text() -> Self {
        Self {
            field_type: FieldType::Text {
                min_len: None,
                max_len: None,
            },
            required: true,
        }
    }

    /// Required integer with inclusive bounds.
    pub fn int(min: i64, max: i64) -> Self {
        Self {
            field_type: FieldType::Int {
                min: Some(min),
                max: Some(max),
            },
            required: true,
        }
    }

    /// Required float with inclusive bounds.
    pub fn float(min: f64, max: f64) -> Self {
        Self {
            field_type: FieldType::Float {
                min: Some(min),
                max: Some(max),
            },
            required: true,
        }
    }

    /// Required boolean.
    pub fn boolean() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: true,
        }
    }

    /// Required timestamp.
    pub fn timestamp() -> Self {
        Self {
            field_type: FieldType::Timestamp,
            required: true,
        }
    }

    /// Required membership in a closed value set.
    pub fn enumeration(allowed: &'static [&'static str]) -> Self {
        Self {
            field_type: FieldType::Enum { allowed },
            required: true,
        }
    }

    /// Required list of sub-records with inclusive length bounds.
    pub fn record_list(schema: RecordSchema, min_len: usize, max_len: usize) -> Self {
        Self {
            field_type: FieldType::RecordList {
                schema: Box::new(schema),
                min_len: Some(min_len),
                max_len: Some(max_len),
            },
            required: true,
        }
    }

    /// Marks this constraint optional: absent or null values pass.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Ordered field constraints defining one record kind's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Record kind name used in violation reports (e.g. "station").
    pub name: &'static str,
    /// Field constraints in declaration order.
    pub fields: Vec<(&'static str, FieldConstraint)>,
}

impl RecordSchema {
    /// Create a schema from declaration-ordered field constraints.
    pub fn new(name: &'static str, fields: Vec<(&'static str, FieldConstraint)>) -> Self {
        Self { name, fields }
    }
}
