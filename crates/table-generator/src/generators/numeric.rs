//! Numeric column generators.
//!
//! Numeric columns rotate through three shapes by index: uniform integers,
//! uniform floats, and normally distributed floats.

use super::{generate_values, ValueGenerator};
use rand::Rng;
use std::f64::consts::PI;
use table_core::{Column, Value, ValueKind};

pub const INT_MIN: i64 = 0;
pub const INT_MAX: i64 = 100;
pub const FLOAT_MIN: f64 = 0.0;
pub const FLOAT_MAX: f64 = 1000.0;
pub const NORMAL_MEAN: f64 = 50.0;
pub const NORMAL_STD_DEV: f64 = 15.0;

/// Distribution used by a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericShape {
    /// Integers uniform in `[min, max]`
    UniformInt { min: i64, max: i64 },
    /// Floats uniform in `[min, max)`
    UniformFloat { min: f64, max: f64 },
    /// Floats from N(mean, std_dev²)
    Normal { mean: f64, std_dev: f64 },
}

impl NumericShape {
    /// Shape of the numeric column at `index`.
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::UniformInt {
                min: INT_MIN,
                max: INT_MAX,
            },
            1 => Self::UniformFloat {
                min: FLOAT_MIN,
                max: FLOAT_MAX,
            },
            _ => Self::Normal {
                mean: NORMAL_MEAN,
                std_dev: NORMAL_STD_DEV,
            },
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::UniformInt { .. } => ValueKind::Integer,
            Self::UniformFloat { .. } | Self::Normal { .. } => ValueKind::Float,
        }
    }
}

impl ValueGenerator for NumericShape {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match *self {
            Self::UniformInt { min, max } => generate_int_range(rng, min, max),
            Self::UniformFloat { min, max } => generate_float_range(rng, min, max),
            Self::Normal { mean, std_dev } => Value::Float(sample_normal(rng, mean, std_dev)),
        }
    }
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.gen_range(min..=max))
}

/// Generate a random float in `[min, max)`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Value {
    Value::Float(rng.gen_range(min..max))
}

/// Draw from a normal distribution using the Box-Muller transform.
pub fn sample_normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // u1 in (0, 1] keeps ln() finite
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Generate the numeric column at `index`.
pub fn generate_numeric_column<R: Rng>(
    rng: &mut R,
    name: String,
    index: usize,
    n_rows: usize,
) -> Column {
    let shape = NumericShape::for_index(index);
    Column::new(name, shape.kind(), generate_values(&shape, rng, n_rows))
}
