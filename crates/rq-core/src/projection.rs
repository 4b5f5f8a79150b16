//! Select lists: resolve, reorder and rename columns.

use crate::column::{ColumnDescriptor, ColumnName, ColumnRef};
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;
use crate::value::Row;
use std::collections::HashSet;

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectItem {
    pub column: ColumnRef,
    /// Output name; defaults to the resolved column's own name.
    pub rename: Option<ColumnName>,
}

impl SelectItem {
    pub fn new(column: ColumnRef) -> Self {
        Self {
            column,
            rename: None,
        }
    }

    pub fn renamed(column: ColumnRef, rename: impl Into<String>) -> Self {
        Self {
            column,
            rename: Some(ColumnName::new(rename)),
        }
    }
}

/// Project `relation` onto `select`.
///
/// The output has one column per select entry, in select order, positioned
/// `0..k-1` and named by the entry's rename (or the source column's name).
/// Qualifiers are carried over from the source columns. Row count never
/// changes. Output names must be unique.
pub fn project(relation: &Relation, select: &[SelectItem]) -> CoreResult<Relation> {
    let mut seen: HashSet<&ColumnName> = HashSet::with_capacity(select.len());
    let mut sources: Vec<&ColumnDescriptor> = Vec::with_capacity(select.len());
    let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(select.len());

    for (position, item) in select.iter().enumerate() {
        let source = relation.resolve(&item.column)?;
        let name = item.rename.as_ref().unwrap_or(&source.name);
        if !seen.insert(name) {
            return Err(CoreError::DuplicateSelectName {
                name: name.to_string(),
            });
        }
        columns.push(ColumnDescriptor::new(
            source.table.clone(),
            name.clone(),
            source.column_type,
            position,
        ));
        sources.push(source);
    }

    let rows: Vec<Row> = relation
        .rows()
        .iter()
        .map(|row| {
            sources
                .iter()
                .map(|source| row[source.position].clone())
                .collect::<Vec<_>>()
                .into()
        })
        .collect();

    log::debug!(
        "select: {} -> {} columns over {} rows",
        relation.column_count(),
        columns.len(),
        rows.len()
    );
    Ok(Relation::from_parts(columns, rows))
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod tests;
