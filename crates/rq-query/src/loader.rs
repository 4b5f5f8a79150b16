//! Table sources and the per-execution table cache.

use crate::error::{QueryError, QueryResult};
use crate::table_file::TableFile;
use rq_core::{Relation, TableName};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default suffix appended to a table name to find its file.
pub const DEFAULT_TABLE_EXTENSION: &str = ".table.json";

/// Somewhere relations can be loaded from by table name.
pub trait TableSource {
    /// Load the table `name`. Its columns are qualified with `name`.
    fn load(&self, name: &TableName) -> QueryResult<Relation>;
}

/// Loads `<dir>/<name><extension>` table files.
#[derive(Debug, Clone)]
pub struct FileTableSource {
    dir: PathBuf,
    extension: String,
}

impl FileTableSource {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Table files in `dir` with the default `.table.json` suffix.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, DEFAULT_TABLE_EXTENSION)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file that holds table `name`.
    pub fn path_for(&self, name: &TableName) -> PathBuf {
        self.dir.join(format!("{}{}", name, self.extension))
    }
}

impl TableSource for FileTableSource {
    fn load(&self, name: &TableName) -> QueryResult<Relation> {
        let path = self.path_for(name);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => QueryError::TableNotFound {
                name: name.to_string(),
                path: path.display().to_string(),
            },
            _ => QueryError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let relation = TableFile::parse(&content)
            .and_then(|file| file.into_relation(name).map_err(|e| e.to_string()))
            .map_err(|details| QueryError::TableParse {
                path: path.display().to_string(),
                details,
            })?;

        log::info!("Loaded \"{}\", {} rows.", path.display(), relation.len());
        Ok(relation)
    }
}

impl<S: TableSource + ?Sized> TableSource for &S {
    fn load(&self, name: &TableName) -> QueryResult<Relation> {
        (**self).load(name)
    }
}

/// In-memory tables keyed by name, mostly useful for tests and embedding.
impl TableSource for HashMap<TableName, Relation> {
    fn load(&self, name: &TableName) -> QueryResult<Relation> {
        self.get(name)
            .cloned()
            .ok_or_else(|| QueryError::TableNotFound {
                name: name.to_string(),
                path: "<memory>".to_string(),
            })
    }
}

/// A [`TableSource`] with a cache scoped to one query execution.
///
/// The first reference to a table name loads it; later references, including
/// ones under a different alias, reuse the cached relation. Create a fresh
/// loader per query: the cache is never invalidated.
#[derive(Debug)]
pub struct TableLoader<S> {
    source: S,
    cache: HashMap<TableName, Relation>,
}

impl<S: TableSource> TableLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Return the cached relation for `name`, loading it on first use.
    pub fn load_or_get(&mut self, name: &TableName) -> QueryResult<Relation> {
        if let Some(relation) = self.cache.get(name) {
            log::debug!("table cache hit: {}", name);
            return Ok(relation.clone());
        }
        let relation = self.source.load(name)?;
        self.cache.insert(name.clone(), relation.clone());
        Ok(relation)
    }

    /// Number of distinct tables loaded so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
