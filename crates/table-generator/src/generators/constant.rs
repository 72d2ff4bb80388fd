//! Constant column generator.

use table_core::{Column, Value, ValueKind};

/// A column holding `value` in every row. Consumes no randomness.
pub fn generate_constant_column(name: String, value: &str, n_rows: usize) -> Column {
    Column::new(name, ValueKind::Text, vec![Value::text(value); n_rows])
}
