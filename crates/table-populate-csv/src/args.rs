//! CLI argument definitions for table generation and CSV output.

use clap::Args;
use std::path::PathBuf;
use table_generator::config::{
    DEFAULT_CATEGORICAL_COLUMNS, DEFAULT_CONSTANT_COLUMN_NAME, DEFAULT_CONSTANT_VALUE,
    DEFAULT_DATETIME_FORMAT, DEFAULT_NULL_FRACTION, DEFAULT_NUMERIC_COLUMNS,
};
use table_generator::{ConfigError, GeneratorConfig};

/// Row count used when neither `--rows` nor a config file gives one.
pub const DEFAULT_ROWS: usize = 1000;

/// Generator knobs shared by every command that builds a table.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to a YAML generator config (column knobs below are ignored when set)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of rows to generate (overrides n_rows from --config)
    #[arg(long, short = 'n')]
    pub rows: Option<usize>,

    /// Number of numeric columns
    #[arg(long, default_value_t = DEFAULT_NUMERIC_COLUMNS, allow_negative_numbers = true)]
    pub numeric: i64,

    /// Number of categorical columns
    #[arg(long, default_value_t = DEFAULT_CATEGORICAL_COLUMNS, allow_negative_numbers = true)]
    pub categorical: i64,

    /// Number of null-heavy columns
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub null_columns: i64,

    /// Per-row null probability for null-heavy columns
    #[arg(long, default_value_t = DEFAULT_NULL_FRACTION, allow_negative_numbers = true)]
    pub null_fraction: f64,

    /// Number of constant columns
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub constant_columns: i64,

    /// Name prefix for constant columns
    #[arg(long, default_value = DEFAULT_CONSTANT_COLUMN_NAME)]
    pub constant_column_name: String,

    /// Value held by every row of a constant column
    #[arg(long, default_value = DEFAULT_CONSTANT_VALUE)]
    pub constant_value: String,

    /// Number of datetime columns
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub datetime_columns: i64,

    /// strftime format for datetime columns (e.g. "%d-%b-%Y")
    #[arg(long, default_value = DEFAULT_DATETIME_FORMAT)]
    pub datetime_format: String,

    /// Null overlay for an existing column, repeatable
    #[arg(long = "null-overlay", value_name = "COLUMN=FRACTION", value_parser = parse_null_overlay)]
    pub null_overlay: Vec<(String, f64)>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "SYNTH_TABLE_SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,
}

impl CommonGenerateArgs {
    /// Build the generator config from a YAML file or from the flags.
    ///
    /// With `--config`, only `--rows` and `--seed` override the file.
    pub fn to_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml_file(path)?,
            None => self.config_from_flags(),
        };
        if let Some(rows) = self.rows {
            config.n_rows = rows;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }

    fn config_from_flags(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.rows.unwrap_or(DEFAULT_ROWS))
            .with_numeric(self.numeric)
            .with_categorical(self.categorical)
            .with_null_columns(self.null_columns, self.null_fraction)
            .with_constant_columns(
                self.constant_columns,
                self.constant_column_name.clone(),
                self.constant_value.clone(),
            )
            .with_datetime_columns(self.datetime_columns, self.datetime_format.clone());
        for (column, fraction) in &self.null_overlay {
            config = config.with_null_overlay(column.clone(), *fraction);
        }
        config
    }
}

/// Parse `COLUMN=FRACTION`.
pub fn parse_null_overlay(s: &str) -> Result<(String, f64), String> {
    let (column, fraction) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("invalid COLUMN=FRACTION: no `=` found in `{s}`"))?;
    let fraction = fraction
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid fraction in `{s}`: {e}"))?;
    Ok((column.to_string(), fraction))
}

/// CSV output arguments.
#[derive(Args, Clone, Debug)]
pub struct CsvPopulateArgs {
    /// Output CSV file
    #[arg(long, short = 'o', default_value = "synthetic_data.csv")]
    pub output: PathBuf,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}
