//! CLI argument definitions using clap derive API

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// rq - evaluate a select/from/where query file against JSON tables
#[derive(Parser, Debug)]
#[command(name = "rq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the query description file
    pub query_file: PathBuf,

    /// Directory holding `<table>.table.json` files (overrides rq.yml)
    #[arg(short, long)]
    pub table_dir: Option<PathBuf>,

    /// Config file (default: rq.yml next to the query file, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Result output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON object with `columns` and `rows`
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
