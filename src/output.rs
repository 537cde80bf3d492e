//! Non-interactive output of a filtered screen.
//!
//! Used by `--print` and `--json`: the same filter pass as the TUI, with
//! the rows written to stdout instead of drawn.

use crate::catalog::{RowHandle, ScreenKind};
use crate::model::{AppError, Item};
use serde::Serialize;
use std::io::Write;

/// Output encoding for printed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One search label per line.
    Plain,
    /// JSON array of `{slot, label, text}` objects.
    Json,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    slot: &'a str,
    label: &'a str,
    text: &'a str,
}

impl<'a> From<&'a Item<RowHandle>> for OutputRow<'a> {
    fn from(item: &'a Item<RowHandle>) -> Self {
        Self {
            slot: item.handle().slot,
            label: item.label(),
            text: item.handle().text,
        }
    }
}

/// Rows of `screen` matching `query`, in screen order.
pub fn matching_rows(screen: ScreenKind, query: &str) -> Vec<Item<RowHandle>> {
    let mut rows = Vec::new();
    screen.build().set_query(query, &mut rows);
    rows
}

/// Labels joined by newlines, with a trailing newline when non-empty.
pub fn format_plain(rows: &[Item<RowHandle>]) -> String {
    rows.iter()
        .map(|item| format!("{}\n", item.label()))
        .collect()
}

/// Pretty-printed JSON array of the rows.
pub fn format_json(rows: &[Item<RowHandle>]) -> Result<String, serde_json::Error> {
    let out: Vec<OutputRow> = rows.iter().map(OutputRow::from).collect();
    serde_json::to_string_pretty(&out)
}

/// Filter `screen` by `query` and write the result to `writer`.
pub fn print_matches<W: Write>(
    writer: &mut W,
    screen: ScreenKind,
    query: &str,
    format: OutputFormat,
) -> Result<usize, AppError> {
    let rows = matching_rows(screen, query);
    match format {
        OutputFormat::Plain => writer.write_all(format_plain(&rows).as_bytes())?,
        OutputFormat::Json => writeln!(writer, "{}", format_json(&rows)?)?,
    }
    writer.flush()?;
    tracing::info!(%screen, query, matches = rows.len(), "Printed matches");
    Ok(rows.len())
}
