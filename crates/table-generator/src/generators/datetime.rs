//! Datetime column generator.
//!
//! Dates are drawn as a base date plus a uniform day offset and stored as
//! text rendered with a caller-supplied strftime format. Parsing them back is
//! left to the consumer of the table.

use super::ValueGenerator;
use crate::config::DEFAULT_DATETIME_FORMAT;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::fmt::Write;
use table_core::{Column, Value, ValueKind};
use tracing::warn;

/// Largest day offset from the base date (about four years).
pub const MAX_DAY_OFFSET: i64 = 1461;

/// First date a datetime column can hold: 2020-01-01 00:00:00.
pub fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Render `date` with `format`, or `None` if the format cannot be rendered.
pub fn format_date(date: NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Return `format` if it renders, otherwise the default `%Y-%m-%d`.
pub fn resolve_format(format: &str) -> &str {
    if format_date(base_date(), format).is_some() {
        format
    } else {
        warn!("Datetime format '{format}' cannot be rendered, using '{DEFAULT_DATETIME_FORMAT}'");
        DEFAULT_DATETIME_FORMAT
    }
}

/// Random formatted dates within [`MAX_DAY_OFFSET`] days of [`base_date`].
#[derive(Debug, Clone, Copy)]
pub struct DateRange<'a> {
    pub base: NaiveDateTime,
    pub max_offset_days: i64,
    pub format: &'a str,
}

impl ValueGenerator for DateRange<'_> {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        let offset = rng.gen_range(0..=self.max_offset_days);
        let date = self.base + Duration::days(offset);
        // format was checked by resolve_format
        Value::Text(format_date(date, self.format).unwrap_or_default())
    }
}

/// Generate a datetime column rendered with `format`.
pub fn generate_datetime_column<R: Rng>(
    rng: &mut R,
    name: String,
    format: &str,
    n_rows: usize,
) -> Column {
    let range = DateRange {
        base: base_date(),
        max_offset_days: MAX_DAY_OFFSET,
        format: resolve_format(format),
    };
    Column::new(
        name,
        ValueKind::Text,
        super::generate_values(&range, rng, n_rows),
    )
}
