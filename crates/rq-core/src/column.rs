//! Column descriptors and unresolved column references.

use crate::newtype_string::define_identifier;
use crate::serde_helpers::empty_as_none;
use crate::value::ColumnType;
use serde::{Deserialize, Serialize};
use std::fmt;

define_identifier! {
    /// A non-empty table name or qualifier (`orders`, or an alias such as `o`).
    pub struct TableName;
}

define_identifier! {
    /// A non-empty column name, or the display name chosen by `select ... as`.
    pub struct ColumnName;
}

/// One entry of a relation's column catalog.
///
/// `position` is the column's offset inside every row of the owning relation.
/// `table` is not unique across a catalog: after a join, same-named columns
/// from different sources are told apart only by their qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnDescriptor {
    pub table: TableName,
    pub name: ColumnName,
    pub column_type: ColumnType,
    pub position: usize,
}

impl ColumnDescriptor {
    pub fn new(
        table: TableName,
        name: ColumnName,
        column_type: ColumnType,
        position: usize,
    ) -> Self {
        Self {
            table,
            name,
            column_type,
            position,
        }
    }

    /// The fully qualified `table.name` form, used in messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }
}

/// A column reference as written in a query, optionally qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Absent, `null` and `""` all mean unqualified
    #[serde(default, deserialize_with = "empty_as_none")]
    pub table: Option<TableName>,
    pub name: ColumnName,
}

impl ColumnRef {
    /// An unqualified reference that matches the column name in any source.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: ColumnName::new(name),
        }
    }

    /// A reference restricted to columns carrying the `table` qualifier.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(TableName::new(table)),
            name: ColumnName::new(name),
        }
    }

    /// Whether `column` satisfies this reference.
    pub fn matches(&self, column: &ColumnDescriptor) -> bool {
        column.name == self.name
            && self
                .table
                .as_ref()
                .is_none_or(|table| column.table == *table)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
#[path = "column_test.rs"]
mod tests;
