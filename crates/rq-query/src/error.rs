//! Error types for rq-query

use rq_core::CoreError;
use thiserror::Error;

/// Errors raised while loading inputs or driving a query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Failure inside the relational algebra
    #[error(transparent)]
    Core(#[from] CoreError),

    /// F001: Two `from` entries use the same working name
    #[error("[F001] table:{name} has already been declared in this query, try using `as` to give it a distinct name")]
    DuplicateTableName { name: String },

    /// L001: No table file for a source name
    #[error("[L001] table:{name} does not exist (looked for {path})")]
    TableNotFound { name: String, path: String },

    /// L002: Table file is not a valid table
    #[error("[L002] failed to parse table file {path}: {details}")]
    TableParse { path: String, details: String },

    /// Q001: Query file missing
    #[error("[Q001] query file:{path} not found, please make sure it exists")]
    QueryFileNotFound { path: String },

    /// Q002: Query file is not a valid query description
    #[error("[Q002] failed to parse query: {details}")]
    QueryParse { details: String },

    /// Q003: Query is well-formed JSON but cannot be run
    #[error("[Q003] invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// C001: Explicit configuration file missing
    #[error("[C001] config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Configuration file could not be parsed
    #[error("[C002] failed to parse config {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// IO error with file path context
    #[error("failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

impl QueryError {
    /// Short label of the stage that raised the error, printed as `ERROR(<component>)`.
    pub fn component(&self) -> &'static str {
        match self {
            QueryError::Core(err) => err.component(),
            QueryError::DuplicateTableName { .. } => "from",
            QueryError::TableNotFound { .. } | QueryError::TableParse { .. } => "load",
            QueryError::QueryFileNotFound { .. }
            | QueryError::QueryParse { .. }
            | QueryError::InvalidQuery { .. } => "query",
            QueryError::ConfigNotFound { .. } | QueryError::ConfigParse { .. } => "config",
            QueryError::IoWithPath { .. } => "io",
        }
    }

    /// Whether the error means the program was invoked wrongly rather than
    /// the query itself being wrong.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            QueryError::QueryFileNotFound { .. } | QueryError::ConfigNotFound { .. }
        )
    }
}

/// Result type alias for QueryError
pub type QueryResult<T> = Result<T, QueryError>;
