//! rq-query - Query layer for rq
//!
//! This crate turns a parsed query description into a result relation. It
//! owns the on-disk formats (query files, table files, `rq.yml`), the
//! per-execution table cache, and the driver that runs the fixed
//! from/where/select pipeline over the `rq-core` algebra.

pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod query;
pub mod table_file;

pub use config::Config;
pub use driver::{run_query, QueryDriver};
pub use error::{QueryError, QueryResult};
pub use loader::{FileTableSource, TableLoader, TableSource};
pub use query::{FromClause, Query, SelectClause, WhereClause};
