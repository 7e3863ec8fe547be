//! Output formatting for the CLI.
//!
//! Tables and route summaries render as plain text, markdown (`rich`), or
//! pretty-printed JSON depending on `--format`.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use skynet_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Rich,
    Json,
}

impl OutputFormat {
    /// Library render mode for the textual formats.
    pub fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Rich => RouteRenderMode::RichText,
            OutputFormat::Text | OutputFormat::Json => RouteRenderMode::PlainText,
        }
    }
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Print a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        _ => {
            print!("{}", summary.render(format.render_mode()));
            Ok(())
        }
    }
}

/// Lay out rows under a header. Text pads columns; rich emits a markdown
/// table.
pub fn format_table(format: OutputFormat, headers: &[&str], rows: &[Vec<String>]) -> String {
    match format {
        OutputFormat::Rich => markdown_table(headers, rows),
        _ => padded_table(headers, rows),
    }
}

fn padded_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut buffer = line(headers.to_vec());
    buffer.push('\n');
    for row in rows {
        buffer.push_str(&line(row.iter().map(String::as_str).collect()));
        buffer.push('\n');
    }
    buffer
}

fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut buffer = format!("| {} |\n", headers.join(" | "));
    buffer.push_str(&format!(
        "|{}\n",
        headers.iter().map(|_| "---|").collect::<String>()
    ));
    for row in rows {
        buffer.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    buffer
}

/// Print `rows` as a table, or `items` as JSON when JSON is selected.
pub fn print_listing<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    headers: &[&str],
    rows: Vec<Vec<String>>,
    empty: &str,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("{empty}");
        return Ok(());
    }
    print!("{}", format_table(format, headers, &rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["JFK".to_string(), "John F Kennedy".to_string()],
            vec!["LHR".to_string(), "Heathrow".to_string()],
        ]
    }

    #[test]
    fn text_table_pads_columns() {
        let table = format_table(OutputFormat::Text, &["Code", "Name"], &rows());
        assert_eq!(
            table,
            "Code  Name\nJFK   John F Kennedy\nLHR   Heathrow\n"
        );
    }

    #[test]
    fn rich_table_is_markdown() {
        let table = format_table(OutputFormat::Rich, &["Code", "Name"], &rows());
        assert!(table.starts_with("| Code | Name |\n|---|---|\n"));
        assert!(table.contains("| LHR | Heathrow |"));
    }
}
