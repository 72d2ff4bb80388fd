//! Generator configuration.
//!
//! A [`GeneratorConfig`] is the full set of knobs for one generated table.
//! It can be built in code or loaded from YAML:
//!
//! ```yaml
//! n_rows: 500
//! n_numeric: 5
//! n_categorical: 4
//! n_null_columns: 2
//! null_fraction: 0.2
//! n_datetime_columns: 2
//! datetime_format: "%d-%b-%Y"
//! columns_with_nulls:
//!   first_name: 0.1
//!   city: 0.15
//! seed: 42
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_NUMERIC_COLUMNS: i64 = 3;
pub const DEFAULT_CATEGORICAL_COLUMNS: i64 = 3;
pub const DEFAULT_NULL_FRACTION: f64 = 0.3;
pub const DEFAULT_CONSTANT_COLUMN_NAME: &str = "constant";
pub const DEFAULT_CONSTANT_VALUE: &str = "CONSTANT";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d";

/// Error type for loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Knobs for one generated table.
///
/// Counts are signed: zero or negative counts produce no columns of that
/// group. Fractions are used as-is as per-row null probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of rows in every column
    pub n_rows: usize,

    /// Numeric columns (`num_N`)
    #[serde(default = "default_numeric")]
    pub n_numeric: i64,

    /// Categorical columns drawn from the category sources
    #[serde(default = "default_categorical")]
    pub n_categorical: i64,

    /// Null-heavy city columns (`with_nulls_N`)
    #[serde(default)]
    pub n_null_columns: i64,

    /// Per-row null probability for null-heavy columns
    #[serde(default = "default_null_fraction")]
    pub null_fraction: f64,

    /// Constant columns (`{constant_column_name}_N`)
    #[serde(default)]
    pub n_constant_columns: i64,

    /// Name prefix for constant columns
    #[serde(default = "default_constant_column_name")]
    pub constant_column_name: String,

    /// Value held by every row of a constant column
    #[serde(default = "default_constant_value")]
    pub constant_value: String,

    /// Datetime columns (`date_N`), stored as formatted text
    #[serde(default)]
    pub n_datetime_columns: i64,

    /// strftime-style format for datetime columns
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Existing column name -> null fraction, applied after generation
    #[serde(default)]
    pub columns_with_nulls: BTreeMap<String, f64>,

    /// Seed for reproducible output; `None` draws from OS entropy.
    /// Negative seeds are accepted and reinterpreted bit-for-bit as `u64`.
    #[serde(default)]
    pub seed: Option<i64>,
}

fn default_numeric() -> i64 {
    DEFAULT_NUMERIC_COLUMNS
}

fn default_categorical() -> i64 {
    DEFAULT_CATEGORICAL_COLUMNS
}

fn default_null_fraction() -> f64 {
    DEFAULT_NULL_FRACTION
}

fn default_constant_column_name() -> String {
    DEFAULT_CONSTANT_COLUMN_NAME.to_string()
}

fn default_constant_value() -> String {
    DEFAULT_CONSTANT_VALUE.to_string()
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

impl GeneratorConfig {
    /// Create a config for `n_rows` rows with every other knob at its default.
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            n_numeric: DEFAULT_NUMERIC_COLUMNS,
            n_categorical: DEFAULT_CATEGORICAL_COLUMNS,
            n_null_columns: 0,
            null_fraction: DEFAULT_NULL_FRACTION,
            n_constant_columns: 0,
            constant_column_name: default_constant_column_name(),
            constant_value: default_constant_value(),
            n_datetime_columns: 0,
            datetime_format: default_datetime_format(),
            columns_with_nulls: BTreeMap::new(),
            seed: None,
        }
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn with_numeric(mut self, count: i64) -> Self {
        self.n_numeric = count;
        self
    }

    pub fn with_categorical(mut self, count: i64) -> Self {
        self.n_categorical = count;
        self
    }

    pub fn with_null_columns(mut self, count: i64, null_fraction: f64) -> Self {
        self.n_null_columns = count;
        self.null_fraction = null_fraction;
        self
    }

    pub fn with_constant_columns(
        mut self,
        count: i64,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.n_constant_columns = count;
        self.constant_column_name = name.into();
        self.constant_value = value.into();
        self
    }

    pub fn with_datetime_columns(mut self, count: i64, format: impl Into<String>) -> Self {
        self.n_datetime_columns = count;
        self.datetime_format = format.into();
        self
    }

    /// Add a null overlay for an existing column.
    pub fn with_null_overlay(mut self, column: impl Into<String>, fraction: f64) -> Self {
        self.columns_with_nulls.insert(column.into(), fraction);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of columns the config will produce.
    pub fn total_columns(&self) -> usize {
        [
            self.n_numeric,
            self.n_categorical,
            self.n_null_columns,
            self.n_constant_columns,
            self.n_datetime_columns,
        ]
        .into_iter()
        .map(column_count)
        .sum()
    }
}

/// Number of columns for a requested count; negative counts mean none.
pub fn column_count(requested: i64) -> usize {
    usize::try_from(requested.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new(100);
        assert_eq!(config.n_numeric, 3);
        assert_eq!(config.n_categorical, 3);
        assert_eq!(config.null_fraction, 0.3);
        assert_eq!(config.constant_column_name, "constant");
        assert_eq!(config.constant_value, "CONSTANT");
        assert_eq!(config.datetime_format, "%Y-%m-%d");
        assert!(config.columns_with_nulls.is_empty());
        assert_eq!(config.seed, None);
        assert_eq!(config.total_columns(), 6);
    }

    #[test]
    fn test_from_yaml_negative_seed() {
        let config = GeneratorConfig::from_yaml("n_rows: 1\nseed: -5\n").unwrap();
        assert_eq!(config.seed, Some(-5));
    }

    #[test]
    fn test_from_yaml_fills_defaults() {
        let config = GeneratorConfig::from_yaml("n_rows: 10\nseed: 7\n").unwrap();
        assert_eq!(config, GeneratorConfig::new(10).with_seed(7));
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
n_rows: 500
n_numeric: 5
n_categorical: 4
n_null_columns: 2
null_fraction: 0.2
n_constant_columns: 1
constant_column_name: contract_type
constant_value: CONTRACT
n_datetime_columns: 2
datetime_format: "%d-%b-%Y"
columns_with_nulls:
  first_name: 0.1
  city: 0.15
seed: 42
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.n_rows, 500);
        assert_eq!(config.n_null_columns, 2);
        assert_eq!(config.constant_column_name, "contract_type");
        assert_eq!(config.datetime_format, "%d-%b-%Y");
        assert_eq!(config.columns_with_nulls.get("city"), Some(&0.15));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.total_columns(), 14);
    }

    #[test]
    fn test_from_yaml_requires_rows() {
        let result = GeneratorConfig::from_yaml("n_numeric: 2\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n_rows: 3\nn_numeric: 1").unwrap();

        let config = GeneratorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.n_rows, 3);
        assert_eq!(config.n_numeric, 1);
    }

    #[test]
    fn test_negative_counts_contribute_nothing() {
        let config = GeneratorConfig::new(1)
            .with_numeric(-4)
            .with_categorical(2)
            .with_datetime_columns(-1, "%Y");
        assert_eq!(config.total_columns(), 2);
        assert_eq!(column_count(-1), 0);
        assert_eq!(column_count(5), 5);
    }
}
