//! Table assembly from a [`GeneratorConfig`].

use crate::config::{column_count, GeneratorConfig};
use crate::generators::categorical::generate_categorical_column;
use crate::generators::constant::generate_constant_column;
use crate::generators::datetime::generate_datetime_column;
use crate::generators::nulls::{apply_null_overlay, generate_null_heavy_column};
use crate::generators::numeric::generate_numeric_column;
use crate::naming::{column_name, disambiguate, ColumnGroup};
use crate::sources::category_source;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use table_core::{Column, Table};
use tracing::debug;

/// Generates synthetic tables from a fixed configuration.
///
/// The generator owns its RNG. With `config.seed` set, the first table it
/// produces is the same on every run; later tables continue the same random
/// stream.
pub struct TableGenerator {
    /// Column-group knobs
    config: GeneratorConfig,
    /// Random source threaded through every draw
    rng: StdRng,
}

impl TableGenerator {
    /// Create a generator seeded from `config.seed`, or from OS entropy when
    /// no seed is set.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create a generator with an explicit RNG, ignoring `config.seed`.
    pub fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one table.
    pub fn generate(&mut self) -> Table {
        generate_with_rng(&self.config, &mut self.rng)
    }
}

/// Generate a table, seeding a fresh RNG from `config.seed`.
pub fn generate(config: &GeneratorConfig) -> Table {
    TableGenerator::new(config.clone()).generate()
}

/// Generate a table drawing all randomness from `rng`.
///
/// Columns are assembled in group order (numeric, categorical, null-heavy,
/// constant, datetime), then `columns_with_nulls` is overlaid in place.
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Table {
    let n_rows = config.n_rows;
    let mut table = Table::new(n_rows);

    for i in 0..column_count(config.n_numeric) {
        let name = column_name(ColumnGroup::Numeric, i);
        append(&mut table, generate_numeric_column(rng, name, i, n_rows));
    }

    for i in 0..column_count(config.n_categorical) {
        let name = column_name(ColumnGroup::Categorical, i);
        let source = category_source(i);
        append(
            &mut table,
            generate_categorical_column(rng, name, source, n_rows),
        );
    }

    for i in 0..column_count(config.n_null_columns) {
        let name = column_name(ColumnGroup::NullHeavy, i);
        append(
            &mut table,
            generate_null_heavy_column(rng, name, config.null_fraction, n_rows),
        );
    }

    // Datetime columns come after constants, so their names are reserved
    // before a caller-supplied constant prefix can claim them.
    let datetime_names: Vec<String> = (0..column_count(config.n_datetime_columns))
        .map(|i| column_name(ColumnGroup::Datetime, i))
        .collect();

    let constant_group = ColumnGroup::Constant {
        prefix: &config.constant_column_name,
    };
    for i in 0..column_count(config.n_constant_columns) {
        let name = disambiguate(column_name(constant_group, i), |candidate| {
            table.contains_column(candidate) || datetime_names.iter().any(|n| n == candidate)
        });
        append(
            &mut table,
            generate_constant_column(name, &config.constant_value, n_rows),
        );
    }

    for name in datetime_names {
        append(
            &mut table,
            generate_datetime_column(rng, name, &config.datetime_format, n_rows),
        );
    }

    if !config.columns_with_nulls.is_empty() {
        apply_null_overlay(&mut table, &config.columns_with_nulls, rng);
    }

    debug!(
        "Generated table with {} rows and {} columns",
        table.n_rows(),
        table.n_columns()
    );

    table
}

fn append(table: &mut Table, column: Column) {
    // Built-in names are disjoint per group, constant names are disambiguated
    // against every other group, and every generator emits n_rows values of
    // its declared kind.
    table
        .push_column(column)
        .expect("generator produced an invalid column");
}
