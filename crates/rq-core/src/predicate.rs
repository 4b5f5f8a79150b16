//! Typed predicates and row filtering.
//!
//! A [`Predicate`] is written against column references. Before it touches
//! any row it is bound to a concrete relation: references are resolved,
//! operand types and the operator are checked against the operator table,
//! and the result is a [`BoundPredicate`] that only compares values.

use crate::column::{ColumnDescriptor, ColumnRef};
use crate::error::{CoreError, CoreResult};
use crate::operator::{comparator, Comparator, Operator};
use crate::relation::Relation;
use crate::value::{Row, Value};
use serde::Serialize;
use std::sync::Arc;

/// Which side of the operator a column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One operand of a comparison, as written in a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Column(ColumnRef),
    Literal(Value),
}

/// A single filtering condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// A column compared with a literal. `column_side` records where the
    /// column was written, since `>` and `<` are not symmetric.
    ColumnLiteral {
        op: Operator,
        column: ColumnRef,
        literal: Value,
        column_side: Side,
    },
    /// Two columns of the same relation compared with each other.
    ColumnColumn {
        op: Operator,
        left: ColumnRef,
        right: ColumnRef,
    },
}

impl Predicate {
    /// Build the predicate variant matching the shape of its operands.
    ///
    /// Two column sides give [`Predicate::ColumnColumn`], exactly one gives
    /// [`Predicate::ColumnLiteral`]. Two literal sides are rejected.
    pub fn from_terms(op: Operator, left: Term, right: Term) -> CoreResult<Self> {
        match (left, right) {
            (Term::Column(left), Term::Column(right)) => {
                Ok(Predicate::ColumnColumn { op, left, right })
            }
            (left, right) => Self::column_literal(op, left, right),
        }
    }

    /// Build a column-to-literal predicate; exactly one side must be a column.
    pub fn column_literal(op: Operator, left: Term, right: Term) -> CoreResult<Self> {
        match (left, right) {
            (Term::Column(column), Term::Literal(literal)) => Ok(Predicate::ColumnLiteral {
                op,
                column,
                literal,
                column_side: Side::Left,
            }),
            (Term::Literal(literal), Term::Column(column)) => Ok(Predicate::ColumnLiteral {
                op,
                column,
                literal,
                column_side: Side::Right,
            }),
            (Term::Column(left), Term::Column(right)) => Err(CoreError::MalformedPredicate {
                reason: format!(
                    "{left} {op} {right} compares two columns, not a column with a literal"
                ),
            }),
            (Term::Literal(left), Term::Literal(right)) => Err(CoreError::MalformedPredicate {
                reason: format!(
                    "{} {op} {} has no column side",
                    left.to_literal(),
                    right.to_literal()
                ),
            }),
        }
    }

    pub fn op(&self) -> Operator {
        match self {
            Predicate::ColumnLiteral { op, .. } | Predicate::ColumnColumn { op, .. } => *op,
        }
    }

    /// Resolve and type-check this predicate against `relation`'s catalog.
    pub fn bind(&self, relation: &Relation) -> CoreResult<BoundPredicate> {
        match self {
            Predicate::ColumnLiteral {
                op,
                column,
                literal,
                column_side,
            } => bind_column_literal(relation, *op, column, literal, *column_side),
            Predicate::ColumnColumn { op, left, right } => {
                bind_column_column(relation, *op, left, right)
            }
        }
    }

    /// Keep the rows of `relation` that satisfy this predicate, in order.
    pub fn evaluate(&self, relation: &Relation) -> CoreResult<Relation> {
        self.bind(relation)?.filter(relation)
    }
}

/// Apply `predicates` in order as a conjunction: each one filters the
/// output of the previous one.
pub fn filter_all<'p>(
    relation: &Relation,
    predicates: impl IntoIterator<Item = &'p Predicate>,
) -> CoreResult<Relation> {
    let mut current = relation.clone();
    for predicate in predicates {
        let before = current.len();
        current = predicate.evaluate(&current)?;
        log::debug!("where {}: {} -> {} rows", predicate, before, current.len());
    }
    Ok(current)
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::ColumnLiteral {
                op,
                column,
                literal,
                column_side: Side::Left,
            } => write!(f, "{column} {op} {}", literal.to_literal()),
            Predicate::ColumnLiteral {
                op,
                column,
                literal,
                column_side: Side::Right,
            } => write!(f, "{} {op} {column}", literal.to_literal()),
            Predicate::ColumnColumn { op, left, right } => write!(f, "{left} {op} {right}"),
        }
    }
}

#[derive(Debug, Clone)]
enum Operand {
    Column(usize),
    Literal(Value),
}

impl Operand {
    fn value<'r>(&'r self, row: &'r Row) -> &'r Value {
        match self {
            Operand::Column(position) => &row[*position],
            Operand::Literal(value) => value,
        }
    }
}

/// A predicate validated against one relation's catalog.
///
/// Column references are reduced to row positions and the comparison is
/// fixed, so evaluating a row does no lookups or type checks. The positions
/// are only meaningful for the catalog the predicate was bound to.
#[derive(Debug, Clone)]
pub struct BoundPredicate {
    columns: Arc<[ColumnDescriptor]>,
    compare: Comparator,
    left: Operand,
    right: Operand,
}

impl BoundPredicate {
    /// Rows must come from a relation with the bound catalog.
    pub(crate) fn matches(&self, row: &Row) -> bool {
        (self.compare)(self.left.value(row), self.right.value(row))
    }

    /// Stable filter: surviving rows keep their relative order.
    ///
    /// Fails with [`CoreError::InvalidRelation`] if `relation` does not have
    /// the catalog this predicate was bound to.
    pub fn filter(&self, relation: &Relation) -> CoreResult<Relation> {
        let same_catalog = Arc::ptr_eq(&self.columns, relation.catalog())
            || self.columns[..] == relation.columns()[..];
        if !same_catalog {
            return Err(CoreError::InvalidRelation {
                reason: "predicate was bound to a different column catalog".to_string(),
            });
        }
        let rows = relation
            .rows()
            .iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect();
        Ok(relation.with_rows(rows))
    }
}

fn describe_column(column: &ColumnDescriptor) -> String {
    format!(
        "column:{} of type:{}",
        column.qualified_name(),
        column.column_type
    )
}

fn lookup(column: &ColumnDescriptor, op: Operator) -> CoreResult<Comparator> {
    comparator(column.column_type, op).ok_or_else(|| CoreError::UnsupportedOperator {
        operator: op.to_string(),
        column_type: column.column_type.to_string(),
    })
}

fn bind_column_literal(
    relation: &Relation,
    op: Operator,
    column_ref: &ColumnRef,
    literal: &Value,
    column_side: Side,
) -> CoreResult<BoundPredicate> {
    let column = relation.resolve(column_ref)?;
    if literal.column_type() != column.column_type {
        return Err(CoreError::TypeMismatch {
            left: describe_column(column),
            right: format!(
                "literal:{} of type:{}",
                literal.to_literal(),
                literal.column_type()
            ),
        });
    }
    let compare = lookup(column, op)?;

    let column_operand = Operand::Column(column.position);
    let literal_operand = Operand::Literal(literal.clone());
    let (left, right) = match column_side {
        Side::Left => (column_operand, literal_operand),
        Side::Right => (literal_operand, column_operand),
    };
    Ok(BoundPredicate {
        columns: Arc::clone(relation.catalog()),
        compare,
        left,
        right,
    })
}

fn bind_column_column(
    relation: &Relation,
    op: Operator,
    left_ref: &ColumnRef,
    right_ref: &ColumnRef,
) -> CoreResult<BoundPredicate> {
    let left = relation.resolve(left_ref)?;
    let right = relation.resolve(right_ref)?;
    if left.column_type != right.column_type {
        return Err(CoreError::TypeMismatch {
            left: describe_column(left),
            right: describe_column(right),
        });
    }
    let compare = lookup(left, op)?;
    Ok(BoundPredicate {
        columns: Arc::clone(relation.catalog()),
        compare,
        left: Operand::Column(left.position),
        right: Operand::Column(right.position),
    })
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
