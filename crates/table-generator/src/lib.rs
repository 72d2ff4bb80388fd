//! Synthetic table generator.
//!
//! This crate provides [`TableGenerator`], which builds a mixed-type
//! [`Table`](table_core::Table) from a [`GeneratorConfig`]. The generator uses
//! a seeded RNG so that the same config and seed always produce the same table.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (code or YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  TableGenerator  │
//! │                  │
//! │  - config        │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │  numeric → categorical → null-heavy → constant → datetime
//!          │  then null overlay
//!          ▼
//!        Table
//! ```
//!
//! # Example
//!
//! ```rust
//! use table_generator::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(100)
//!     .with_null_columns(1, 0.2)
//!     .with_datetime_columns(1, "%d-%b-%Y")
//!     .with_null_overlay("first_name", 0.1)
//!     .with_seed(42);
//!
//! let table = generate(&config);
//! assert_eq!(table.shape(), (100, 8));
//! ```
//!
//! # Column groups
//!
//! - numeric `num_N` - rotating uniform int / uniform float / normal float
//! - categorical - first names, last names, cities, countries, departments, products
//! - null-heavy `with_nulls_N` - cities with a per-row null probability
//! - constant `{prefix}_N` - one repeated value
//! - datetime `date_N` - formatted dates from 2020-01-01 onward

pub mod config;
pub mod generator;
pub mod generators;
pub mod naming;
pub mod sources;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use generator::{generate, generate_with_rng, TableGenerator};
pub use naming::{column_name, ColumnGroup};
