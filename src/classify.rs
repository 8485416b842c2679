//! Column type classification over a table's row sample.
//!
//! Each distinct column name lands in exactly one of four groups,
//! decided in order:
//! 1. numeric, when every non-null sampled value is a number
//! 2. datetime, when the column name looks like a date or time
//! 3. text, when the first sampled value is longer than the threshold
//! 4. categorical, otherwise
//!
//! Only the first row's value drives the text/categorical split, so a
//! column that opens with a short value stays categorical even when later
//! values are long.

use crate::table::Table;
use crate::value::Value;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Default character length above which a value counts as free text.
pub const DEFAULT_TEXT_THRESHOLD: usize = 50;

/// Substrings of a lower-cased column name that mark it as a date/time.
const DATE_SUBSTRINGS: &[&str] = &["date", "time"];

/// Suffixes of a lower-cased column name that mark it as a date/time.
const DATE_SUFFIXES: &[&str] = &["_at", "_on", "_ts"];

/// Semantic type assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Datetime,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
            ColumnKind::Datetime => write!(f, "datetime"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// Column names grouped by kind, each group in table column order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub datetime: Vec<String>,
    pub text: Vec<String>,
}

impl ColumnClassification {
    /// The group holding columns of `kind`.
    pub fn columns(&self, kind: ColumnKind) -> &[String] {
        match kind {
            ColumnKind::Numeric => &self.numeric,
            ColumnKind::Categorical => &self.categorical,
            ColumnKind::Datetime => &self.datetime,
            ColumnKind::Text => &self.text,
        }
    }

    /// Kind assigned to the column called `name`, if classified.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        [
            ColumnKind::Numeric,
            ColumnKind::Datetime,
            ColumnKind::Text,
            ColumnKind::Categorical,
        ]
        .into_iter()
        .find(|&kind| self.columns(kind).iter().any(|c| c == name))
    }

    /// Total number of classified columns.
    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len() + self.datetime.len() + self.text.len()
    }

    /// Returns true when no column was classified (zero-row table).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, kind: ColumnKind, name: &str) {
        let group = match kind {
            ColumnKind::Numeric => &mut self.numeric,
            ColumnKind::Categorical => &mut self.categorical,
            ColumnKind::Datetime => &mut self.datetime,
            ColumnKind::Text => &mut self.text,
        };
        group.push(name.to_string());
    }
}

/// Column classifier with configurable heuristics.
///
/// # Example
///
/// ```
/// use tabular_preview::{Classifier, Ingestor};
///
/// let table = Ingestor::new()
///     .parse_bytes("people.csv", b"id,name,signup_date\n1,Alice,2023-01-01\n")
///     .unwrap();
///
/// let mut classifier = Classifier::new();
/// classifier.text_threshold(80);
///
/// let classes = classifier.classify(&table);
/// assert_eq!(classes.numeric, vec!["id"]);
/// assert_eq!(classes.datetime, vec!["signup_date"]);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Character length above which a first value counts as free text.
    text_threshold: usize,
    /// Extra lower-case substrings that mark a date/time column name.
    extra_date_hints: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a new Classifier with default settings.
    pub fn new() -> Self {
        Self {
            text_threshold: DEFAULT_TEXT_THRESHOLD,
            extra_date_hints: Vec::new(),
        }
    }

    /// Set the free-text length threshold.
    pub fn text_threshold(&mut self, threshold: usize) -> &mut Self {
        self.text_threshold = threshold;
        self
    }

    /// Add a substring that marks a column name as a date/time.
    pub fn date_hint(&mut self, hint: &str) -> &mut Self {
        self.extra_date_hints.push(hint.to_lowercase());
        self
    }

    /// Classify every column of `table`.
    ///
    /// A table with no rows yields an empty classification. A repeated
    /// column name is classified once, from its first position, the same
    /// column [`Table::get`] resolves to.
    pub fn classify(&self, table: &Table) -> ColumnClassification {
        let mut result = ColumnClassification::default();
        if table.is_empty() {
            return result;
        }

        let mut seen = HashSet::new();
        for (idx, name) in table.columns().iter().enumerate() {
            if !seen.insert(name.as_str()) {
                continue;
            }
            result.push(self.classify_column(table, idx, name), name);
        }

        tracing::debug!(
            numeric = result.numeric.len(),
            categorical = result.categorical.len(),
            datetime = result.datetime.len(),
            text = result.text.len(),
            "classified columns"
        );

        result
    }

    /// Classify a single column of a non-empty table.
    pub fn classify_column(&self, table: &Table, idx: usize, name: &str) -> ColumnKind {
        if is_numeric_column(table.column_values(idx)) {
            return ColumnKind::Numeric;
        }

        if self.is_date_name(name) {
            return ColumnKind::Datetime;
        }

        let first_len = table
            .rows()
            .first()
            .and_then(|row| row.get(idx))
            .map_or(0, first_value_len);

        if first_len > self.text_threshold {
            ColumnKind::Text
        } else {
            ColumnKind::Categorical
        }
    }

    /// Returns true if the column name suggests a date or time.
    pub fn is_date_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        DATE_SUBSTRINGS.iter().any(|hint| lower.contains(hint))
            || DATE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
            || self
                .extra_date_hints
                .iter()
                .any(|hint| lower.contains(hint.as_str()))
    }
}

/// All non-null values are numeric, and there is at least one.
fn is_numeric_column<'a>(values: impl Iterator<Item = &'a Value>) -> bool {
    let mut seen = false;
    for value in values.filter(|v| !v.is_null()) {
        if !value.is_numeric() {
            return false;
        }
        seen = true;
    }
    seen
}

/// Character length of a value as shown in a preview cell.
fn first_value_len(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}

/// Classify `table` with default settings.
pub fn classify(table: &Table) -> ColumnClassification {
    Classifier::new().classify(table)
}
