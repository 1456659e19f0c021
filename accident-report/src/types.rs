//! Core types for the accident report library
//!
//! This module defines the dynamically-typed cell value every column is made
//! of, and the error type shared by loading, derivation and rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading or reporting on a dataset
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to parse input file: {0}")]
    InputParseError(String),

    #[error("Column '{column}' has {found} values, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Failed to render chart: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A single cell of the dataset
///
/// Cells are typed dynamically: any column may hold any mix of variants,
/// and `Missing` marks absent or unparseable data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Text(String),
    Missing,
}

impl Value {
    /// Infer a typed value from raw text, the way a CSV cell is read
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Value::Missing;
        }
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_nan() {
                return Value::Missing;
            }
            return Value::float(f);
        }
        match s {
            "true" | "True" | "TRUE" => Value::Bool(true),
            "false" | "False" | "FALSE" => Value::Bool(false),
            _ => Value::Text(s.to_string()),
        }
    }

    /// Float cell with `-0.0` folded into `0.0`
    pub fn float(f: f64) -> Self {
        Value::Float(zero_sign(f))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Numeric view of the value; booleans count as 0/1
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in dataset summaries
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Date(_) => "date",
            Value::Text(_) => "text",
            Value::Missing => "missing",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Missing => 0,
            Value::Bool(_) => 1,
            Value::Integer(_) | Value::Float(_) => 2,
            Value::Date(_) => 3,
            Value::Text(_) => 4,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => write!(f, "<missing>"),
        }
    }
}

/// Signed zeros are one value for equality, ordering and hashing
fn zero_sign(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

// Numbers compare by magnitude across Integer/Float so sorted axes read
// naturally; equality stays variant-exact to match grouping.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ra, rb) = (self.rank(), other.rank());
        if ra != rb {
            return ra.cmp(&rb);
        }
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                let (x, y) = (
                    zero_sign(a.as_f64().unwrap_or(0.0)),
                    zero_sign(b.as_f64().unwrap_or(0.0)),
                );
                x.total_cmp(&y).then_with(|| {
                    // Integer(2) sorts before Float(2.0)
                    matches!(a, Value::Float(_)).cmp(&matches!(b, Value::Float(_)))
                })
            }
            _ => Ordering::Equal,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Integer(v) => v.hash(state),
            Value::Float(v) => zero_sign(*v).to_bits().hash(state),
            Value::Bool(v) => v.hash(state),
            Value::Date(d) => d.hash(state),
            Value::Text(s) => s.hash(state),
            Value::Missing => {}
        }
    }
}
