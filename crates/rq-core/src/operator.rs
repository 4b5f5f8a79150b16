//! Comparison operators and the per-type operator table.

use crate::error::CoreError;
use crate::value::{ColumnType, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// Whether the operator may be applied to operands of `column_type`.
    pub fn supports(self, column_type: ColumnType) -> bool {
        comparator(column_type, self).is_some()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CoreError::UnsupportedOperator {
                operator: s.to_string(),
                column_type: "any".to_string(),
            })
    }
}

impl TryFrom<String> for Operator {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> String {
        op.symbol().to_string()
    }
}

/// A pure two-argument comparison between values of one type.
pub type Comparator = fn(&Value, &Value) -> bool;

fn equal_to(left: &Value, right: &Value) -> bool {
    left == right
}

fn not_equal_to(left: &Value, right: &Value) -> bool {
    left != right
}

fn greater_than(left: &Value, right: &Value) -> bool {
    left.cmp(right) == Ordering::Greater
}

fn greater_than_or_equal_to(left: &Value, right: &Value) -> bool {
    greater_than(left, right) || equal_to(left, right)
}

fn less_than(left: &Value, right: &Value) -> bool {
    left.cmp(right) == Ordering::Less
}

fn less_than_or_equal_to(left: &Value, right: &Value) -> bool {
    less_than(left, right) || equal_to(left, right)
}

/// Look up the comparison for `op` on operands of `column_type`.
///
/// `int` supports every operator; `str` only supports `=` and `!=`.
/// Returns `None` for pairs outside that table.
pub fn comparator(column_type: ColumnType, op: Operator) -> Option<Comparator> {
    match (column_type, op) {
        (_, Operator::Eq) => Some(equal_to),
        (_, Operator::Ne) => Some(not_equal_to),
        (ColumnType::Int, Operator::Gt) => Some(greater_than),
        (ColumnType::Int, Operator::Ge) => Some(greater_than_or_equal_to),
        (ColumnType::Int, Operator::Lt) => Some(less_than),
        (ColumnType::Int, Operator::Le) => Some(less_than_or_equal_to),
        (ColumnType::Str, _) => None,
    }
}

#[cfg(test)]
#[path = "operator_test.rs"]
mod tests;
