//! Column resolution with ambiguity detection.

use crate::column::{ColumnDescriptor, ColumnRef};
use crate::error::{CoreError, CoreResult};
use crate::relation::Relation;

/// Find the single column in `relation` that `column` refers to.
///
/// A reference matches on name, and also on qualifier when it carries one.
/// Zero matches is [`CoreError::ColumnNotFound`]; several matches is
/// [`CoreError::AmbiguousColumn`] listing every qualifier that matched.
pub fn resolve<'a>(relation: &'a Relation, column: &ColumnRef) -> CoreResult<&'a ColumnDescriptor> {
    let mut matches = relation.columns().iter().filter(|c| column.matches(c));

    let Some(first) = matches.next() else {
        return Err(CoreError::ColumnNotFound {
            column: column.to_string(),
        });
    };

    let rest: Vec<&ColumnDescriptor> = matches.collect();
    if rest.is_empty() {
        return Ok(first);
    }

    let tables = std::iter::once(first)
        .chain(rest)
        .map(|c| c.table.as_str())
        .collect::<Vec<_>>()
        .join("|");
    Err(CoreError::AmbiguousColumn {
        column: column.to_string(),
        tables,
    })
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
