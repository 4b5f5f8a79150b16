//! The immutable relation value.

use crate::column::{ColumnDescriptor, ColumnName, ColumnRef, TableName};
use crate::error::{CoreError, CoreResult};
use crate::value::{ColumnType, Row};
use std::sync::Arc;

/// An immutable table: a column catalog plus positionally aligned rows.
///
/// Relations are never modified. Joins, filters, projections and aliases all
/// build a new relation; the catalog and rows are reference counted so that
/// operations which keep them unchanged share storage with their input.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    columns: Arc<[ColumnDescriptor]>,
    rows: Arc<[Row]>,
}

impl Relation {
    /// Build a relation, checking that the catalog and rows agree.
    ///
    /// Column positions must be exactly `0..N-1` in catalog order, every row
    /// must hold N values, and every value must match its column's type.
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Row>) -> CoreResult<Self> {
        for (index, column) in columns.iter().enumerate() {
            if column.position != index {
                return Err(CoreError::InvalidRelation {
                    reason: format!(
                        "column:{} has position {} but sits at offset {}",
                        column.qualified_name(),
                        column.position,
                        index
                    ),
                });
            }
        }
        for (row_index, row) in rows.iter().enumerate() {
            check_row(&columns, row_index, row)?;
        }
        Ok(Self::from_parts(columns, rows))
    }

    /// Build a relation from a table header of `(name, type)` pairs.
    ///
    /// Every column is qualified with `table` and positioned in header order.
    pub fn from_schema(
        table: &TableName,
        schema: impl IntoIterator<Item = (ColumnName, ColumnType)>,
        rows: Vec<Row>,
    ) -> CoreResult<Self> {
        let columns = schema
            .into_iter()
            .enumerate()
            .map(|(position, (name, column_type))| {
                ColumnDescriptor::new(table.clone(), name, column_type, position)
            })
            .collect();
        Self::new(columns, rows)
    }

    /// Assemble a relation whose invariants the caller already guarantees.
    pub(crate) fn from_parts(
        columns: impl Into<Arc<[ColumnDescriptor]>>,
        rows: impl Into<Arc<[Row]>>,
    ) -> Self {
        Self {
            columns: columns.into(),
            rows: rows.into(),
        }
    }

    /// Same catalog, different rows. Used by filters.
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
            rows: rows.into(),
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Shared handle to the catalog, for identity checks.
    pub(crate) fn catalog(&self) -> &Arc<[ColumnDescriptor]> {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display names of the columns, in catalog order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Resolve a column reference against this relation's catalog.
    pub fn resolve(&self, column: &ColumnRef) -> CoreResult<&ColumnDescriptor> {
        crate::resolver::resolve(self, column)
    }

    /// Requalify every column with `qualifier`, sharing the row storage.
    ///
    /// This is how one source is referenced twice under different names, or
    /// renamed for readability, without copying its data.
    pub fn alias(&self, qualifier: &TableName) -> Relation {
        let columns: Vec<ColumnDescriptor> = self
            .columns
            .iter()
            .map(|column| ColumnDescriptor {
                table: qualifier.clone(),
                ..column.clone()
            })
            .collect();
        Self {
            columns: columns.into(),
            rows: Arc::clone(&self.rows),
        }
    }
}

fn check_row(columns: &[ColumnDescriptor], row_index: usize, row: &Row) -> CoreResult<()> {
    if row.len() != columns.len() {
        return Err(CoreError::InvalidRelation {
            reason: format!(
                "row {} has {} values but the relation has {} columns",
                row_index,
                row.len(),
                columns.len()
            ),
        });
    }
    for (column, value) in columns.iter().zip(row.values()) {
        if value.column_type() != column.column_type {
            return Err(CoreError::InvalidRelation {
                reason: format!(
                    "row {} holds {} of type:{} for column:{} of type:{}",
                    row_index,
                    value.to_literal(),
                    value.column_type(),
                    column.qualified_name(),
                    column.column_type
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
