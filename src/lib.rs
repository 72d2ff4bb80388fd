//! synth-table library
//!
//! Synthetic mixed-type tables for exercising data-cleaning and
//! feature-engineering pipelines.
//!
//! # Features
//!
//! - Numeric, categorical, null-heavy, constant and datetime column groups
//! - Post-hoc null overlay onto named columns
//! - Reproducible output from an explicit seed
//! - CSV output with empty fields for missing values
//!
//! # CLI Usage
//!
//! ```bash
//! # 500 rows, two null-heavy columns, reproducible
//! synth-table generate --rows 500 --null-columns 2 --null-fraction 0.2 --seed 42 -o data.csv
//!
//! # Knobs from a YAML file
//! synth-table generate --config generator.yaml -o data.csv
//!
//! # The fixed illustrative table
//! synth-table example
//!
//! # Schema and null counts without writing a file
//! synth-table describe --rows 100 --null-overlay city=0.5
//! ```

pub mod report;

// Re-export the workspace crates for convenience
pub use csv_types;
pub use table_core::{Column, Table, Value, ValueKind};
pub use table_generator::{generate, generate_with_rng, GeneratorConfig, TableGenerator};
pub use table_populate_csv::{CommonGenerateArgs, CsvPopulateArgs, CsvPopulator};

/// Output file used by the `example` command.
pub const EXAMPLE_OUTPUT: &str = "synthetic_data.csv";

/// Fixed illustrative parameters for the `example` command.
///
/// 10000 rows with three numeric and five categorical columns, one null-heavy
/// column, a `contract_type` constant column, two `%d-%b-%Y` date columns, and
/// overlays on `first_name` and `city`.
pub fn example_config() -> GeneratorConfig {
    GeneratorConfig::new(10_000)
        .with_numeric(3)
        .with_categorical(5)
        .with_null_columns(1, 0.75)
        .with_constant_columns(1, "contract_type", "CONTRACT")
        .with_datetime_columns(2, "%d-%b-%Y")
        .with_null_overlay("first_name", 0.1)
        .with_null_overlay("city", 0.15)
        .with_seed(123)
}
