//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur while writing a table to CSV.
#[derive(Error, Debug)]
pub enum CsvPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
