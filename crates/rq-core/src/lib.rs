//! rq-core - Relational core for rq
//!
//! This crate provides the immutable [`Relation`] value and the algebra that
//! runs over it: column resolution with ambiguity detection, the cross join
//! used to merge sources, typed predicate evaluation, projection and
//! aliasing. Every operation returns a new relation and leaves its input
//! untouched.

pub mod column;
pub mod error;
pub mod join;
mod newtype_string;
pub mod operator;
pub mod predicate;
pub mod projection;
pub mod relation;
pub mod resolver;
pub mod serde_helpers;
pub mod value;

pub use column::{ColumnDescriptor, ColumnName, ColumnRef, TableName};
pub use error::{CoreError, CoreResult};
pub use join::{cross_join, cross_join_all};
pub use operator::{comparator, Comparator, Operator};
pub use predicate::{filter_all, BoundPredicate, Predicate, Side, Term};
pub use projection::{project, SelectItem};
pub use relation::Relation;
pub use resolver::resolve;
pub use value::{ColumnType, Row, Value};
