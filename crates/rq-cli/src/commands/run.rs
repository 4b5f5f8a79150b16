//! Run command implementation

use anyhow::Result;
use rq_query::{Config, Query, QueryDriver};

use crate::cli::{Cli, OutputFormat};
use crate::render;
use crate::report::UsageError;

/// Load the query and its configuration, evaluate it, and print the result.
pub(crate) fn execute(cli: &Cli) -> Result<()> {
    let query = Query::from_path(&cli.query_file)?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&cli.query_file)?,
    };
    if let Some(dir) = &cli.table_dir {
        if !dir.is_dir() {
            return Err(UsageError(format!(
                "table directory {} does not exist",
                dir.display()
            ))
            .into());
        }
        config.table_dir = dir.clone();
    }

    if cli.verbose {
        eprintln!(
            "[verbose] Running {} with tables from {}",
            cli.query_file.display(),
            config.table_dir.display()
        );
    }

    let driver = QueryDriver::new(config.table_source());
    let result = driver.run(&query)?;
    log::debug!(
        "query produced {} rows, {} columns",
        result.len(),
        result.column_count()
    );

    let output = match cli.format {
        OutputFormat::Table => render::render_table(&result),
        OutputFormat::Json => render::render_json(&result)?,
    };
    println!("{output}");
    Ok(())
}
