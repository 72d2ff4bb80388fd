//! Column naming.
//!
//! Every generated column name is a pure function of its group and its index
//! within the group. The built-in schemes never overlap:
//!
//! | Group       | Names                                               |
//! |-------------|-----------------------------------------------------|
//! | numeric     | `num_1`, `num_2`, ...                               |
//! | categorical | `first_name` ... `product`, then `first_name_7` ... |
//! | null-heavy  | `with_nulls_1`, `with_nulls_2`, ...                 |
//! | constant    | `{prefix}_1`, `{prefix}_2`, ...                     |
//! | datetime    | `date_1`, `date_2`, ...                             |
//!
//! The constant prefix is caller-supplied, so it is the only scheme that can
//! collide. Table assembly runs constant names through [`disambiguate`]
//! against the columns built so far and the datetime names still to come.

use crate::sources::{category_source, CATEGORY_SOURCES};

/// The five synthesis groups of a generated table, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnGroup<'a> {
    Numeric,
    Categorical,
    NullHeavy,
    Constant { prefix: &'a str },
    Datetime,
}

/// Name of the column at `index` (zero-based) within `group`.
pub fn column_name(group: ColumnGroup<'_>, index: usize) -> String {
    let ordinal = index + 1;
    match group {
        ColumnGroup::Numeric => format!("num_{ordinal}"),
        ColumnGroup::Categorical => {
            let label = category_source(index).label;
            if index < CATEGORY_SOURCES.len() {
                label.to_string()
            } else {
                format!("{label}_{ordinal}")
            }
        }
        ColumnGroup::NullHeavy => format!("with_nulls_{ordinal}"),
        ColumnGroup::Constant { prefix } => format!("{prefix}_{ordinal}"),
        ColumnGroup::Datetime => format!("date_{ordinal}"),
    }
}

/// Return `name` unchanged if it is free, otherwise the first of
/// `{name}_2`, `{name}_3`, ... that is.
pub fn disambiguate(name: String, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(&name) {
        return name;
    }
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{name}_{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
