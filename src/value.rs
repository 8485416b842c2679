//! Cell values and unambiguous number recognition.

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Plain decimal or scientific notation. No thousands separators, no
/// leading zeros on a multi-digit integer part, no `NaN`/`inf`.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:(?:0|[1-9]\d*)(?:\.\d+)?|\.\d+)(?:[eE][-+]?\d+)?$")
        .expect("Invalid number pattern")
});

/// Largest magnitude printed as an integer rather than a float.
const MAX_INTEGRAL: f64 = 9_007_199_254_740_992.0;

/// A single cell of a [`Table`](crate::Table) row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or empty cell.
    #[default]
    Null,
    /// Boolean cell (spreadsheet sources only).
    Bool(bool),
    /// Numeric cell.
    Number(f64),
    /// Any other text.
    String(String),
    /// Native spreadsheet date or datetime cell.
    DateTime(NaiveDateTime),
}

impl Value {
    /// Coerce a delimited-text field: empty is null, unambiguous numbers
    /// become [`Value::Number`], everything else stays a string.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return Value::Null;
        }
        match parse_number(field) {
            Some(n) => Value::Number(n),
            None => Value::String(field.to_string()),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for numbers and for strings that parse unambiguously
    /// as numbers.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Number(_) => true,
            Value::String(s) => parse_number(s).is_some(),
            _ => false,
        }
    }

    /// Returns the string content for string cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse `s` as a number only when the reading is unambiguous.
///
/// Surrounding whitespace is ignored.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !NUMBER_PATTERN.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[inline]
fn is_integral(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_INTEGRAL
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if is_integral(*n) => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::DateTime(_) => serializer.collect_str(self),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
