//! Forward conversion: Value → CSV string.

use table_core::Value;

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Value> for CsvValue {
    fn from(value: Value) -> Self {
        match value {
            // Null - empty field
            Value::Null => CsvValue(String::new()),
            Value::Int(i) => CsvValue(i.to_string()),
            // Shortest text that parses back to the same f64
            Value::Float(f) => CsvValue(f.to_string()),
            Value::Text(s) => CsvValue(s),
        }
    }
}

impl From<&Value> for CsvValue {
    fn from(value: &Value) -> Self {
        CsvValue::from(value.clone())
    }
}

/// Escape a value for CSV (double quotes and add quotes if needed).
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Convert a row of values to a CSV line (no trailing newline).
pub fn values_to_csv_line<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let fields: Vec<String> = values
        .into_iter()
        .map(|value| escape_csv(CsvValue::from(value).as_str()))
        .collect();
    fields.join(",")
}
