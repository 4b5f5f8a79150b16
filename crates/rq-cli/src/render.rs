//! Result presentation: aligned text table and JSON.

use rq_core::{Relation, Row};
use serde::Serialize;

const COLUMN_DIVIDER: &str = " | ";

/// Render `relation` as an aligned text table.
///
/// The header line is followed by a dashed divider spanning the full width.
/// Cells are separated by ` | `; every column is left-aligned except the
/// last, which is right-aligned.
pub(crate) fn render_table(relation: &Relation) -> String {
    let header: Vec<String> = relation
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let body: Vec<Vec<String>> = relation
        .rows()
        .iter()
        .map(|row| row.values().iter().map(|v| v.to_string()).collect())
        .collect();

    let widths = column_widths(&header, &body);
    let total_width =
        widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * COLUMN_DIVIDER.len();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(&header, &widths));
    lines.push("-".repeat(total_width));
    lines.extend(body.iter().map(|cells| format_line(cells, &widths)));
    lines.join("\n")
}

fn column_widths(header: &[String], body: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let last = widths.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, &width))| {
            if index == last {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_DIVIDER)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    columns: Vec<&'a str>,
    rows: &'a [Row],
}

/// Render `relation` as pretty-printed JSON: `{"columns": [...], "rows": [[...]]}`.
pub(crate) fn render_json(relation: &Relation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        columns: relation.column_names(),
        rows: relation.rows(),
    })
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
