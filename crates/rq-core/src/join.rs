//! Cross join (Cartesian merge) of relations.

use crate::column::ColumnDescriptor;
use crate::relation::Relation;
use crate::value::Row;

/// Merge two relations into their Cartesian product.
///
/// The output catalog is `left`'s columns followed by `right`'s, with the
/// right-hand positions shifted past the left-hand ones. Qualifiers and names
/// are copied as-is. Each left row is paired with every right row, left
/// values first, so the result has `left.len() * right.len()` rows.
pub fn cross_join(left: &Relation, right: &Relation) -> Relation {
    let offset = left.column_count();
    let columns: Vec<ColumnDescriptor> = left
        .columns()
        .iter()
        .cloned()
        .chain(right.columns().iter().map(|column| ColumnDescriptor {
            position: column.position + offset,
            ..column.clone()
        }))
        .collect();

    let mut rows: Vec<Row> = Vec::with_capacity(left.len().saturating_mul(right.len()));
    for left_row in left.rows() {
        for right_row in right.rows() {
            rows.push(left_row.concat(right_row));
        }
    }

    log::debug!(
        "cross join: {}x{} rows -> {} rows, {} columns",
        left.len(),
        right.len(),
        rows.len(),
        columns.len()
    );
    Relation::from_parts(columns, rows)
}

/// Fold [`cross_join`] left-to-right over `relations` in iteration order.
///
/// Returns `None` when there is nothing to merge.
pub fn cross_join_all(relations: impl IntoIterator<Item = Relation>) -> Option<Relation> {
    relations
        .into_iter()
        .reduce(|merged, next| cross_join(&merged, &next))
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
