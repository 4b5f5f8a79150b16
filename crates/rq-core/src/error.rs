//! Error types for rq-core

use thiserror::Error;

/// Errors raised by the relational algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// R001: No column matches the reference
    #[error("[R001] column:{column} not found, maybe the source table was never selected")]
    ColumnNotFound { column: String },

    /// R002: More than one column matches an unqualified or under-qualified reference
    #[error("[R002] column:{column} is ambiguous, found matching columns in tables:{tables}; qualify it with one of those table names")]
    AmbiguousColumn { column: String, tables: String },

    /// W001: Predicate operands have different declared types
    #[error("[W001] cannot compare {left} with {right}")]
    TypeMismatch { left: String, right: String },

    /// W002: Operator not allowed for the operand type (or not an operator at all)
    #[error("[W002] non-sensical operator:{operator} for type:{column_type}")]
    UnsupportedOperator {
        operator: String,
        column_type: String,
    },

    /// W003: Column-to-literal predicate without exactly one column side
    #[error("[W003] malformed where expression: {reason}")]
    MalformedPredicate { reason: String },

    /// S001: Two select entries produce the same output name
    #[error("[S001] column as:{name} already selected in this query, please use a unique name")]
    DuplicateSelectName { name: String },

    /// V001: Column catalog and rows disagree
    #[error("[V001] invalid relation: {reason}")]
    InvalidRelation { reason: String },
}

impl CoreError {
    /// Short label of the stage that raised the error, printed as `ERROR(<component>)`.
    pub fn component(&self) -> &'static str {
        match self {
            CoreError::ColumnNotFound { .. } | CoreError::AmbiguousColumn { .. } => "resolve",
            CoreError::TypeMismatch { .. }
            | CoreError::UnsupportedOperator { .. }
            | CoreError::MalformedPredicate { .. } => "where",
            CoreError::DuplicateSelectName { .. } => "select",
            CoreError::InvalidRelation { .. } => "relation",
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
