//! Query descriptions as read from a query file.
//!
//! ```json
//! {
//!   "from":   [{"source": {"file": "orders"}, "as": "o"}],
//!   "where":  [{"op": ">", "left": {"column": {"table": "o", "name": "total"}}, "right": {"lit_int": 10}}],
//!   "select": [{"source": {"column": {"name": "id"}}, "as": "order_id"}]
//! }
//! ```

use crate::error::{QueryError, QueryResult};
use rq_core::serde_helpers::{empty_as_none, null_as_default};
use rq_core::{
    ColumnName, ColumnRef, CoreResult, Operator, Predicate, SelectItem, TableName, Term, Value,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete query: sources, filters and select list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Sources to cross join, in declaration order
    pub from: Vec<FromClause>,

    /// Filters applied in order as a conjunction; missing or `null` means none
    #[serde(rename = "where", default, deserialize_with = "null_as_default")]
    pub filters: Vec<WhereClause>,

    /// Output columns
    pub select: Vec<SelectClause>,
}

/// One `from` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromClause {
    pub source: FromSource,

    /// Working qualifier; defaults to the source's own name
    #[serde(rename = "as", default, deserialize_with = "empty_as_none")]
    pub alias: Option<TableName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromSource {
    /// Table name, resolved to a table file by the loader
    pub file: TableName,
}

impl FromClause {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            source: FromSource {
                file: TableName::new(file),
            },
            alias: None,
        }
    }

    pub fn aliased(file: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(TableName::new(alias)),
            ..Self::new(file)
        }
    }

    pub fn table(&self) -> &TableName {
        &self.source.file
    }

    /// The qualifier this source's columns carry inside the query.
    pub fn working_name(&self) -> &TableName {
        self.alias.as_ref().unwrap_or(&self.source.file)
    }
}

/// One side of a `where` comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTerm {
    Column(ColumnRef),
    LitInt(i64),
    LitStr(String),
}

impl QueryTerm {
    pub fn to_term(&self) -> Term {
        match self {
            QueryTerm::Column(column) => Term::Column(column.clone()),
            QueryTerm::LitInt(v) => Term::Literal(Value::Int(*v)),
            QueryTerm::LitStr(s) => Term::Literal(Value::Str(s.clone())),
        }
    }
}

/// One `where` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    /// Operator symbol; checked when the predicate is built
    pub op: String,
    pub left: QueryTerm,
    pub right: QueryTerm,
}

impl WhereClause {
    pub fn new(op: impl Into<String>, left: QueryTerm, right: QueryTerm) -> Self {
        Self {
            op: op.into(),
            left,
            right,
        }
    }

    pub fn to_predicate(&self) -> CoreResult<Predicate> {
        let op: Operator = self.op.parse()?;
        Predicate::from_terms(op, self.left.to_term(), self.right.to_term())
    }
}

/// One `select` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectClause {
    pub source: SelectSource,

    /// Output name; defaults to the column's own name
    #[serde(rename = "as", default, deserialize_with = "empty_as_none")]
    pub alias: Option<ColumnName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectSource {
    pub column: ColumnRef,
}

impl SelectClause {
    pub fn new(column: ColumnRef) -> Self {
        Self {
            source: SelectSource { column },
            alias: None,
        }
    }

    pub fn aliased(column: ColumnRef, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(ColumnName::new(alias)),
            ..Self::new(column)
        }
    }

    pub fn to_select_item(&self) -> SelectItem {
        SelectItem {
            column: self.source.column.clone(),
            rename: self.alias.clone(),
        }
    }
}

impl Query {
    /// Read and validate a query file.
    pub fn from_path(path: &Path) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => QueryError::QueryFileNotFound {
                path: path.display().to_string(),
            },
            _ => QueryError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            },
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a query from JSON text.
    pub fn from_json_str(content: &str) -> QueryResult<Self> {
        let query: Query = serde_json::from_str(content).map_err(|e| QueryError::QueryParse {
            details: e.to_string(),
        })?;
        query.validate()?;
        Ok(query)
    }

    /// A query needs at least one source and at least one output column.
    pub fn validate(&self) -> QueryResult<()> {
        if self.from.is_empty() {
            return Err(QueryError::InvalidQuery {
                reason: "`from` must name at least one table".to_string(),
            });
        }
        if self.select.is_empty() {
            return Err(QueryError::InvalidQuery {
                reason: "`select` must name at least one column".to_string(),
            });
        }
        Ok(())
    }

    /// Build the predicate for every `where` entry, in order.
    pub fn predicates(&self) -> CoreResult<Vec<Predicate>> {
        self.filters.iter().map(WhereClause::to_predicate).collect()
    }

    pub fn select_items(&self) -> Vec<SelectItem> {
        self.select.iter().map(SelectClause::to_select_item).collect()
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
