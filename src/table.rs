//! Normalized in-memory table produced by ingestion.

use crate::value::Value;
use serde::Serialize;

/// One row record. Holds exactly one cell per table column, by position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row(Vec<Value>);

impl Row {
    /// Returns the cell at column position `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.0.get(idx)
    }

    /// Returns the cells in column order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

/// An ordered column list plus a bounded sample of rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    /// Column names in display order. Duplicates are kept as-is.
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with nulls and dropping cells past
    /// the last column. Returns the number of dropped cells.
    pub fn push_row(&mut self, mut cells: Vec<Value>) -> usize {
        let width = self.columns.len();
        let dropped = cells.len().saturating_sub(width);
        cells.resize(width, Value::Null);
        self.rows.push(Row(cells));
        dropped
    }

    /// Returns the column names in display order.
    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in source order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` for the first column called `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx)
    }

    /// Iterate one column's cells, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_row_normalizes_width() {
        let mut table = Table::new(cols(&["a", "b", "c"]));

        assert_eq!(table.push_row(vec![Value::Number(1.0)]), 0);
        assert_eq!(
            table.push_row(vec![
                Value::from("x"),
                Value::from("y"),
                Value::from("z"),
                Value::from("extra"),
            ]),
            1
        );

        assert_eq!(table.num_rows(), 2);
        assert!(table.rows().iter().all(|r| r.values().len() == 3));
        assert_eq!(table.get(0, "c"), Some(&Value::Null));
        assert_eq!(table.get(1, "c"), Some(&Value::from("z")));
    }

    #[test]
    fn test_duplicate_columns_resolve_to_first() {
        let mut table = Table::new(cols(&["x", "x"]));
        table.push_row(vec![Value::Number(1.0), Value::Number(2.0)]);

        assert_eq!(table.column_index("x"), Some(0));
        assert_eq!(table.get(0, "x"), Some(&Value::Number(1.0)));
        assert_eq!(table.column_values(1).count(), 1);
    }

    #[test]
    fn test_serialize_shape() {
        let mut table = Table::new(cols(&["id", "name"]));
        table.push_row(vec![Value::Number(1.0), Value::from("Alice")]);

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":["id","name"],"rows":[[1,"Alice"]]}"#);
    }
}
