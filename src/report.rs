//! Human- and machine-readable summaries of a generated table.

use csv_types::values_to_csv_line;
use serde::Serialize;
use std::fmt;
use table_core::{ColumnSummary, Table};
use tracing::info;

/// Shape and per-column schema of a table.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub n_rows: usize,
    pub n_columns: usize,
    pub columns: Vec<ColumnSummary>,
}

impl TableReport {
    pub fn new(table: &Table) -> Self {
        Self {
            n_rows: table.n_rows(),
            n_columns: table.n_columns(),
            columns: table.summary(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Text rendering of shape, the first `head` rows, schema and null counts.
pub struct TextReport<'a> {
    table: &'a Table,
    head: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(table: &'a Table, head: usize) -> Self {
        Self { table, head }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.table.shape();
        writeln!(f, "Shape: ({rows}, {columns})")?;

        if self.head > 0 && rows > 0 {
            writeln!(f, "\nFirst {} rows:", self.head.min(rows))?;
            writeln!(f, "{}", self.table.column_names().join(","))?;
            for row in self.table.rows().take(self.head) {
                writeln!(f, "{}", values_to_csv_line(row))?;
            }
        }

        writeln!(f, "\nSchema:")?;
        for column in self.table.columns() {
            writeln!(f, "  {}: {}", column.name, column.kind)?;
        }

        writeln!(f, "\nNull counts:")?;
        for (name, nulls) in self.table.null_counts() {
            writeln!(f, "  {name}: {nulls}")?;
        }
        Ok(())
    }
}

/// Render shape, the first `head` rows, schema and null counts as text.
pub fn render_text(table: &Table, head: usize) -> String {
    TextReport::new(table, head).to_string()
}

/// Log shape and null counts at info level.
pub fn log_summary(table: &Table) {
    let (rows, columns) = table.shape();
    info!("Generated table with shape ({rows}, {columns})");
    for (name, nulls) in table.null_counts() {
        if nulls > 0 {
            info!("Column '{name}' has {nulls} nulls");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_core::{Column, Value, ValueKind};

    fn small_table() -> Table {
        let mut table = Table::new(2);
        table
            .push_column(Column::new(
                "num_1",
                ValueKind::Integer,
                vec![Value::Int(1), Value::Int(2)],
            ))
            .unwrap();
        table
            .push_column(Column::new(
                "city",
                ValueKind::Text,
                vec![Value::Null, Value::text("Mesa")],
            ))
            .unwrap();
        table
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&small_table(), 5);

        assert!(text.starts_with("Shape: (2, 2)\n"));
        assert!(text.contains("First 2 rows:\nnum_1,city\n1,\n2,Mesa\n"));
        assert!(text.contains("  num_1: int64\n  city: str\n"));
        assert!(text.contains("Null counts:\n  num_1: 0\n  city: 1\n"));
    }

    #[test]
    fn test_text_report_display_matches_render() {
        let table = small_table();
        assert_eq!(
            format!("{}", TextReport::new(&table, 1)),
            render_text(&table, 1)
        );
    }

    #[test]
    fn test_render_text_without_head() {
        let text = render_text(&small_table(), 0);
        assert!(!text.contains("First"));
    }

    #[test]
    fn test_report_json() {
        let json = TableReport::new(&small_table()).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["n_rows"], 2);
        assert_eq!(parsed["columns"][1]["name"], "city");
        assert_eq!(parsed["columns"][1]["kind"], "text");
        assert_eq!(parsed["columns"][1]["null_count"], 1);
    }
}
