//! Ordered, column-oriented table.

use crate::values::{Value, ValueKind};
use serde::{Deserialize, Serialize};

/// Error type for table construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TableError {
    /// A column with the same name already exists
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Column length differs from the table's row count
    #[error("Column '{column}' has {actual} values, table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A non-null value does not match the column's declared kind
    #[error("Column '{column}' declared as {kind} holds a mismatched value at row {row}")]
    KindMismatch {
        column: String,
        kind: ValueKind,
        row: usize,
    },
}

/// A named, typed sequence of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Declared kind of the non-null values
    pub kind: ValueKind,

    /// One value per row
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, kind: ValueKind, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Number of values in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null values.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Replace the value at `row` with null.
    ///
    /// Returns `false` if `row` is out of range.
    pub fn set_null(&mut self, row: usize) -> bool {
        match self.values.get_mut(row) {
            Some(value) => {
                *value = Value::Null;
                true
            }
            None => false,
        }
    }

    fn first_mismatch(&self) -> Option<usize> {
        self.values.iter().position(|v| !self.kind.accepts(v))
    }
}

/// Per-column summary used for schema and null-count reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ValueKind,
    pub null_count: usize,
}

/// An ordered set of uniquely named columns, all `n_rows` long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    n_rows: usize,
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table that will hold `n_rows` rows.
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            columns: Vec::new(),
        }
    }

    /// Append a column.
    ///
    /// The column must have a fresh name, exactly `n_rows` values, and only
    /// values matching its declared kind.
    pub fn push_column(&mut self, column: Column) -> Result<(), TableError> {
        if self.contains_column(&column.name) {
            return Err(TableError::DuplicateColumn(column.name));
        }
        if column.len() != self.n_rows {
            return Err(TableError::LengthMismatch {
                expected: self.n_rows,
                actual: column.len(),
                column: column.name,
            });
        }
        if let Some(row) = column.first_mismatch() {
            return Err(TableError::KindMismatch {
                kind: column.kind,
                column: column.name,
                row,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// All columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Values of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.n_rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.n_rows).map(move |i| self.columns.iter().map(|c| &c.values[i]).collect())
    }

    /// Null count of every column, in column order.
    pub fn null_counts(&self) -> Vec<(&str, usize)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.null_count()))
            .collect()
    }

    /// Name, kind and null count of every column.
    pub fn summary(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .map(|c| ColumnSummary {
                name: c.name.clone(),
                kind: c.kind,
                null_count: c.null_count(),
            })
            .collect()
    }
}
