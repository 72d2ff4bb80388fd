//! CSV type conversions for table-core values.
//!
//! This crate provides conversions between table-core's [`Value`] and CSV
//! field text.
//!
//! # Modules
//!
//! - [`forward`] - Value → CSV string conversion
//! - [`reverse`] - CSV string → Value conversion
//!
//! # Example
//!
//! ```rust
//! use csv_types::{csv_string_to_value, CsvValue};
//! use table_core::{Value, ValueKind};
//!
//! // Forward: Value → CSV string
//! let csv_val: CsvValue = Value::Int(42).into();
//! assert_eq!(csv_val.as_str(), "42");
//!
//! // Reverse: CSV string → Value
//! let value = csv_string_to_value("42", ValueKind::Integer).unwrap();
//! assert_eq!(value, Value::Int(42));
//! ```
//!
//! [`Value`]: table_core::Value

pub mod forward;
pub mod reverse;

pub use forward::{escape_csv, values_to_csv_line, CsvValue};
pub use reverse::{csv_string_to_value, CsvParseError};
