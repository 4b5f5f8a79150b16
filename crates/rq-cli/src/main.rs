//! rq CLI - evaluate select/from/where query files against JSON tables

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod render;
mod report;

use cli::Cli;
use commands::run;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report::report_clap_error(err),
    };
    init_logging(cli.verbose);

    match run::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report::report(&err),
    }
}

/// Default filter: warnings, plus one line per loaded table.
const DEFAULT_LOG_FILTER: &str = "warn,rq_query::loader=info";

/// Send library log records to stderr. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    });

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
