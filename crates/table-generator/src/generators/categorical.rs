//! Categorical column generator.

use super::{generate_values, ValueGenerator};
use crate::sources::CategorySource;
use rand::Rng;
use table_core::{Column, Value, ValueKind};

impl ValueGenerator for CategorySource {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        Value::text(sample_token(rng, self.tokens))
    }
}

/// Pick one token uniformly. `tokens` must be non-empty.
pub fn sample_token<'a, R: Rng>(rng: &mut R, tokens: &[&'a str]) -> &'a str {
    tokens[rng.gen_range(0..tokens.len())]
}

/// Generate a column drawn with replacement from `source`.
pub fn generate_categorical_column<R: Rng>(
    rng: &mut R,
    name: String,
    source: &CategorySource,
    n_rows: usize,
) -> Column {
    Column::new(name, ValueKind::Text, generate_values(source, rng, n_rows))
}
