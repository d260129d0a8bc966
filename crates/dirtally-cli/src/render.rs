//! Plain-text rendering of a report table.
use dirtally_core::model::size::{format_count, format_size};
use dirtally_core::model::ReportTable;
use std::fmt::Write;

/// Column separator in the rendered table.
const GAP: &str = "  ";

/// Render `table` as aligned columns followed by a one-line summary.
///
/// The directory column is left-aligned; every numeric column is
/// right-aligned under its header.
pub fn render_table(table: &ReportTable) -> String {
    let header = table.columns();
    let extensions = table.extension_columns();
    let rows: Vec<Vec<String>> = table.rows().iter().map(|r| r.cells(&extensions)).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }

    let _ = writeln!(
        out,
        "\n{} director{}, {} files, {}",
        table.len(),
        if table.len() == 1 { "y" } else { "ies" },
        format_count(table.total_files()),
        format_size(table.total_bytes()),
    );
    if !table.skipped.is_empty() {
        let _ = writeln!(out, "{} inclusion(s) skipped", table.skipped.len());
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(GAP);
        }
        if i == 0 {
            let _ = write!(line, "{cell:<width$}");
        } else {
            let _ = write!(line, "{cell:>width$}");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
