//! Missing-value generation: null-heavy columns and the null overlay.

use super::categorical::sample_token;
use super::ValueGenerator;
use crate::sources::CITIES;
use rand::Rng;
use std::collections::BTreeMap;
use table_core::{Column, Table, Value, ValueKind};
use tracing::debug;

/// Roll a per-row null with probability `fraction`.
///
/// The fraction is not validated: values at or below 0 never hit, values at
/// or above 1 always hit, and NaN never hits.
pub fn roll_null<R: Rng>(rng: &mut R, fraction: f64) -> bool {
    rng.gen::<f64>() < fraction
}

/// City tokens with incidental missingness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullHeavy {
    pub null_fraction: f64,
}

impl ValueGenerator for NullHeavy {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        if roll_null(rng, self.null_fraction) {
            Value::Null
        } else {
            Value::text(sample_token(rng, CITIES))
        }
    }
}

/// Generate a null-heavy city column.
pub fn generate_null_heavy_column<R: Rng>(
    rng: &mut R,
    name: String,
    null_fraction: f64,
    n_rows: usize,
) -> Column {
    let generator = NullHeavy { null_fraction };
    Column::new(
        name,
        ValueKind::Text,
        super::generate_values(&generator, rng, n_rows),
    )
}

/// Overlay nulls onto existing columns, in place.
///
/// Every row of every named column gets a fresh roll, independent of nulls
/// already present. Names not in the table are skipped. Returns the number of
/// columns the overlay touched.
pub fn apply_null_overlay<R: Rng>(
    table: &mut Table,
    columns_with_nulls: &BTreeMap<String, f64>,
    rng: &mut R,
) -> usize {
    let mut applied = 0;
    for (name, fraction) in columns_with_nulls {
        let Some(column) = table.column_mut(name) else {
            debug!("Skipping null overlay for unknown column '{name}'");
            continue;
        };
        for value in column.values.iter_mut() {
            if roll_null(rng, *fraction) {
                *value = Value::Null;
            }
        }
        debug!(
            "Applied null overlay to '{}' (fraction {}), {} nulls",
            name,
            fraction,
            column.null_count()
        );
        applied += 1;
    }
    applied
}
