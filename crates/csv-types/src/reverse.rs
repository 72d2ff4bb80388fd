//! Reverse conversion: CSV string → Value.
//!
//! An empty field is read back as [`Value::Null`] for every kind, mirroring
//! how the forward conversion writes nulls.

use table_core::{Value, ValueKind};

/// Error type for CSV parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_kind: ValueKind,
}

impl std::fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse '{}' as {}: {}",
            self.value, self.expected_kind, self.message
        )
    }
}

impl std::error::Error for CsvParseError {}

/// Parse a CSV field according to the column kind.
///
/// This is the reverse of `CsvValue::from(Value)`.
pub fn csv_string_to_value(value: &str, kind: ValueKind) -> Result<Value, CsvParseError> {
    if value.is_empty() {
        return Ok(Value::Null);
    }

    match kind {
        ValueKind::Integer => value.parse::<i64>().map(Value::Int).map_err(|_| CsvParseError {
            message: "Invalid integer".to_string(),
            value: value.to_string(),
            expected_kind: kind,
        }),
        ValueKind::Float => value.parse::<f64>().map(Value::Float).map_err(|_| CsvParseError {
            message: "Invalid float".to_string(),
            value: value.to_string(),
            expected_kind: kind,
        }),
        ValueKind::Text => Ok(Value::text(value)),
    }
}
