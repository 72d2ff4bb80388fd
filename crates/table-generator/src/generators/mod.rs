//! Column generators for each synthesis group.
//!
//! Each generator draws one whole column at a time, row by row, from the
//! caller's RNG. Draw order is therefore column-major, which is what makes a
//! seeded table reproducible.

pub mod categorical;
pub mod constant;
pub mod datetime;
pub mod nulls;
pub mod numeric;

use rand::Rng;
use table_core::Value;

/// Trait for generating cell values.
pub trait ValueGenerator {
    /// Generate the value for one row.
    fn generate<R: Rng>(&self, rng: &mut R) -> Value;
}

/// Draw `n_rows` values from `generator`.
pub fn generate_values<G: ValueGenerator, R: Rng>(
    generator: &G,
    rng: &mut R,
    n_rows: usize,
) -> Vec<Value> {
    (0..n_rows).map(|_| generator.generate(rng)).collect()
}
