//! CSV populator for generated tables.

use crate::error::CsvPopulatorError;
use csv::Writer;
use csv_types::CsvValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use table_core::Table;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated tables as CSV.
#[derive(Debug, Clone)]
pub struct CsvPopulator {
    include_header: bool,
}

impl Default for CsvPopulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvPopulator {
    /// Create a new CSV populator that writes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write `table` to a CSV file at `output_path`, replacing any existing file.
    pub fn populate<P: AsRef<Path>>(
        &self,
        table: &Table,
        output_path: P,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows and {} columns",
            output_path.display(),
            table.n_rows(),
            table.n_columns()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_table(table, buf_writer)?;

        let metrics = PopulateMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec, {:.2} bytes/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }

    /// Write `table` as CSV to any writer. Returns the number of data rows.
    pub fn write_table<W: Write>(&self, table: &Table, out: W) -> Result<u64, CsvPopulatorError> {
        let mut writer = Writer::from_writer(out);

        if self.include_header {
            writer.write_record(table.column_names())?;
        }

        let mut rows_written = 0u64;
        for row in table.rows() {
            writer.write_record(row_to_csv_record(&row))?;
            rows_written += 1;

            if rows_written % 10000 == 0 {
                debug!("Written {} rows", rows_written);
            }
        }

        writer.flush()?;
        Ok(rows_written)
    }
}

/// Convert one row to CSV fields; nulls become empty fields.
fn row_to_csv_record(row: &[&table_core::Value]) -> Vec<String> {
    row.iter()
        .map(|value| CsvValue::from(*value).into_inner())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv_types::csv_string_to_value;
    use table_core::{Column, Value, ValueKind};
    use tempfile::TempDir;

    fn test_table() -> Table {
        let mut table = Table::new(3);
        table
            .push_column(Column::new(
                "num_1",
                ValueKind::Integer,
                vec![Value::Int(4), Value::Null, Value::Int(99)],
            ))
            .unwrap();
        table
            .push_column(Column::new(
                "city",
                ValueKind::Text,
                vec![
                    Value::text("Boston"),
                    Value::text("Kansas City"),
                    Value::Null,
                ],
            ))
            .unwrap();
        table
            .push_column(Column::new(
                "num_2",
                ValueKind::Float,
                vec![Value::Float(1.5), Value::Float(2.0), Value::Float(0.25)],
            ))
            .unwrap();
        table
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
    }

    #[test]
    fn test_row_to_csv_record() {
        let table = test_table();
        let row = table.row(1).unwrap();
        assert_eq!(row_to_csv_record(&row), vec!["", "Kansas City", "2"]);
    }

    #[test]
    fn test_write_table_to_buffer() {
        let mut buffer = Vec::new();
        let rows = CsvPopulator::new()
            .write_table(&test_table(), &mut buffer)
            .unwrap();

        assert_eq!(rows, 3);
        let content = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["num_1,city,num_2", "4,Boston,1.5", ",Kansas City,2", "99,,0.25"]
        );
    }

    #[test]
    fn test_populate_csv() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.csv");

        let metrics = CsvPopulator::new()
            .populate(&test_table(), &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 3);
        assert!(output_path.exists());
        assert_eq!(
            metrics.file_size_bytes,
            std::fs::metadata(&output_path).unwrap().len()
        );

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // 1 header + 3 data rows
        assert_eq!(lines[0], "num_1,city,num_2");
    }

    #[test]
    fn test_populate_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.csv");

        CsvPopulator::new()
            .with_header(false)
            .populate(&test_table(), &output_path)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // No header, just 3 data rows
    }

    #[test]
    fn test_read_back_matches_table() {
        let table = test_table();
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.csv");
        CsvPopulator::new().populate(&table, &output_path).unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), table.column_names());

        for (index, record) in reader.records().enumerate() {
            let record = record.unwrap();
            for (field, column) in record.iter().zip(table.columns()) {
                let value = csv_string_to_value(field, column.kind).unwrap();
                assert_eq!(value, column.values[index]);
            }
        }
    }

    #[test]
    fn test_populate_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("test.csv");

        let result = CsvPopulator::new().populate(&test_table(), &output_path);
        assert!(matches!(result, Err(CsvPopulatorError::Io(_))));
    }
}
