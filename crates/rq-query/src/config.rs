//! Configuration from rq.yml

use crate::error::{QueryError, QueryResult};
use crate::loader::{FileTableSource, DEFAULT_TABLE_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to a query file when no config is given.
pub const CONFIG_FILE_NAME: &str = "rq.yml";

/// Where table files live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding table files. Relative paths are resolved against
    /// the directory of the config file that set them.
    #[serde(default = "default_table_dir")]
    pub table_dir: PathBuf,

    /// Suffix appended to a table name to form its file name
    #[serde(default = "default_table_extension")]
    pub table_extension: String,
}

fn default_table_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_table_extension() -> String {
    DEFAULT_TABLE_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_dir: default_table_dir(),
            table_extension: default_table_extension(),
        }
    }
}

impl Config {
    /// Load a config file that must exist.
    pub fn load(path: &Path) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => QueryError::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => QueryError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str::<Config>(&content).map_err(|e| QueryError::ConfigParse {
                path: path.display().to_string(),
                details: e.to_string(),
            })?
        };

        if config.table_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.table_dir = base.join(&config.table_dir);
            }
        }
        log::debug!(
            "loaded config {}: table_dir={}, table_extension={}",
            path.display(),
            config.table_dir.display(),
            config.table_extension
        );
        Ok(config)
    }

    /// Use `rq.yml` beside the query file if there is one, else defaults.
    pub fn discover(query_path: &Path) -> QueryResult<Self> {
        let candidate = query_path
            .parent()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The file-backed table source described by this config.
    pub fn table_source(&self) -> FileTableSource {
        FileTableSource::new(&self.table_dir, &self.table_extension)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
