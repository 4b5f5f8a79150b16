//! Top-level error reporting and exit codes.

use rq_query::QueryError;
use std::process::ExitCode;
use thiserror::Error;

/// Exit status for query and data errors.
pub(crate) const EXIT_QUERY_ERROR: u8 = 2;

/// Exit status for invocation errors (bad arguments, missing query file).
pub(crate) const EXIT_USAGE_ERROR: u8 = 64;

/// The program was invoked incorrectly.
#[derive(Error, Debug)]
#[error("{0}")]
pub(crate) struct UsageError(pub String);

/// Component label and exit status for an error that reached `main`.
pub(crate) fn classify(err: &anyhow::Error) -> (Option<&'static str>, u8) {
    if err.downcast_ref::<UsageError>().is_some() {
        return (Some("CLI"), EXIT_USAGE_ERROR);
    }
    match err.downcast_ref::<QueryError>() {
        Some(query_err) if query_err.is_usage_error() => {
            (Some(query_err.component()), EXIT_USAGE_ERROR)
        }
        Some(query_err) => (Some(query_err.component()), EXIT_QUERY_ERROR),
        None => (None, EXIT_QUERY_ERROR),
    }
}

/// `ERROR(<component>): <message>`, or `ERROR: <message>` without a component.
pub(crate) fn format_error(component: Option<&str>, message: &str) -> String {
    match component {
        Some(component) => format!("ERROR({component}): {message}"),
        None => format!("ERROR: {message}"),
    }
}

/// Print `err` to stderr and return the matching exit code.
pub(crate) fn report(err: &anyhow::Error) -> ExitCode {
    let (component, code) = classify(err);
    eprintln!("{}", format_error(component, &err.to_string()));
    ExitCode::from(code)
}

/// Handle a clap parse failure: help and version go to stdout with
/// success, anything else is a usage error.
pub(crate) fn report_clap_error(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            // Printing help can only fail on a closed stdout.
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", format_error(Some("CLI"), "no query file provided"));
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        _ => {
            let rendered = err.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            eprintln!("{}", format_error(Some("CLI"), message));
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
