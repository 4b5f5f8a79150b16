//! Query evaluation pipeline.
//!
//! Evaluation order is fixed: load and qualify every source, cross join them
//! left to right, apply each filter in order, then project. Any failure
//! aborts the whole query.

use crate::error::{QueryError, QueryResult};
use crate::loader::{TableLoader, TableSource};
use crate::query::{FromClause, Query};
use rq_core::{cross_join_all, filter_all, project, Relation, TableName};
use std::collections::HashSet;

/// Runs queries against one table source, with a fresh cache per query.
#[derive(Debug)]
pub struct QueryDriver<S> {
    source: S,
}

impl<S: TableSource> QueryDriver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self, query: &Query) -> QueryResult<Relation> {
        let mut loader = TableLoader::new(&self.source);
        run_query(&mut loader, query)
    }
}

/// Evaluate `query`, loading tables through `loader`.
pub fn run_query<S: TableSource>(
    loader: &mut TableLoader<S>,
    query: &Query,
) -> QueryResult<Relation> {
    query.validate()?;

    let sources = load_sources(loader, &query.from)?;
    let merged = cross_join_all(sources).ok_or_else(|| QueryError::InvalidQuery {
        reason: "`from` must name at least one table".to_string(),
    })?;
    log::debug!(
        "from: {} source(s) merged into {} rows, {} columns",
        query.from.len(),
        merged.len(),
        merged.column_count()
    );

    let predicates = query.predicates()?;
    let filtered = filter_all(&merged, &predicates)?;

    let result = project(&filtered, &query.select_items())?;
    Ok(result)
}

/// Load each `from` source and qualify it with its working name.
fn load_sources<S: TableSource>(
    loader: &mut TableLoader<S>,
    from: &[FromClause],
) -> QueryResult<Vec<Relation>> {
    let mut used: HashSet<&TableName> = HashSet::with_capacity(from.len());
    let mut sources = Vec::with_capacity(from.len());

    for clause in from {
        let table = loader.load_or_get(clause.table())?;
        let name = clause.working_name();
        if !used.insert(name) {
            return Err(QueryError::DuplicateTableName {
                name: name.to_string(),
            });
        }
        let table = if name == clause.table() {
            table
        } else {
            table.alias(name)
        };
        sources.push(table);
    }
    Ok(sources)
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
