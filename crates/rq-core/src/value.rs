//! Scalar values, their declared types, and rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Str,
}

impl ColumnType {
    /// Parse the type token used in table file headers (`"int"` or `"str"`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "int" => Some(ColumnType::Int),
            "str" => Some(ColumnType::Str),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Str => "str",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell value.
///
/// Ordering is only meaningful between values of the same variant; the
/// predicate engine never compares across types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) => ColumnType::Int,
            Value::Str(_) => ColumnType::Str,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    /// Render the value as it would be written in a query: strings quoted.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Str(s) => format!("{s:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// An immutable row of values, positionally aligned with a column catalog.
///
/// Cloning a row only bumps a reference count, so filters and aliases share
/// row storage with their input relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row(Arc<[Value]>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values.into())
    }

    /// Concatenate two rows, `self` first.
    pub fn concat(&self, other: &Row) -> Row {
        let mut values = Vec::with_capacity(self.len() + other.len());
        values.extend_from_slice(&self.0);
        values.extend_from_slice(&other.0);
        Row::new(values)
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.0.get(position)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row::new(values)
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl std::ops::Index<usize> for Row {
    type Output = Value;

    fn index(&self, position: usize) -> &Value {
        &self.0[position]
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
