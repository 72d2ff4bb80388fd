//! Cell value representations.
//!
//! Every cell of a generated table is one of a closed set of kinds. Columns
//! declare a [`ValueKind`] and hold [`Value`]s of that kind or [`Value::Null`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Text value (categorical token, constant, formatted date)
    Text(String),

    /// Missing value
    Null,
}

impl Value {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The kind of this value, or `None` for null.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Int(_) => Some(ValueKind::Integer),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Text(_) => Some(ValueKind::Text),
            Self::Null => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    ///
    /// Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Declared kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Integer,
    Float,
    Text,
}

impl ValueKind {
    /// Whether `value` may be stored in a column of this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match value.kind() {
            Some(kind) => kind == *self,
            None => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "int64",
            Self::Float => "float64",
            Self::Text => "str",
        };
        f.write_str(name)
    }
}
