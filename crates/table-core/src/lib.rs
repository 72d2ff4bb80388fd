//! Core types for the synth-table generator.
//!
//! This crate provides the in-memory table model shared by the generator and
//! the output writers:
//!
//! - [`Value`] - A single cell: integer, float, text or null
//! - [`ValueKind`] - The declared kind of a column
//! - [`Column`] - A named, typed sequence of values
//! - [`Table`] - An ordered set of uniquely named columns of equal length
//!
//! # Architecture
//!
//! ```text
//! table-core (this crate)
//!    │
//!    ├─── table-generator     (builds tables from a GeneratorConfig)
//!    ├─── csv-types           (Value -> CSV field text)
//!    └─── table-populate-csv  (writes a Table to a CSV file)
//! ```
//!
//! # Example
//!
//! ```rust
//! use table_core::{Column, Table, Value, ValueKind};
//!
//! let mut table = Table::new(2);
//! table
//!     .push_column(Column::new(
//!         "num_1",
//!         ValueKind::Integer,
//!         vec![Value::Int(1), Value::Null],
//!     ))
//!     .unwrap();
//!
//! assert_eq!(table.shape(), (2, 1));
//! assert_eq!(table.column("num_1").unwrap().null_count(), 1);
//! ```

pub mod table;
pub mod values;

pub use table::{Column, ColumnSummary, Table, TableError};
pub use values::{Value, ValueKind};
