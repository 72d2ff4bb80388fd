//! CSV file populator for generated tables.
//!
//! This crate writes a [`Table`](table_core::Table) produced by the
//! table-generator crate to a delimited text file: a header row of column
//! names, one comma-separated record per row, and an empty field for every
//! null.
//!
//! # Example
//!
//! ```ignore
//! use table_generator::{generate, GeneratorConfig};
//! use table_populate_csv::CsvPopulator;
//!
//! let table = generate(&GeneratorConfig::new(1000).with_seed(42));
//! let metrics = CsvPopulator::new().populate(&table, "synthetic_data.csv")?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CommonGenerateArgs, CsvPopulateArgs};
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics};
