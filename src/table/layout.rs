//! Column widths and physical-line layout for multi-line cells.
//!
//! A cell is split on `\n` into display lines. A row occupies as many
//! physical lines as its tallest cell; shorter cells are padded with blanks.

use unicode_width::UnicodeWidthStr;

use super::style::Style;

/// Terminal columns taken by one display line. Wide characters count as 2.
#[must_use]
pub fn display_width(line: &str) -> usize {
    line.width()
}

/// Append `line` to `out`, left-justified and space-padded to `width` columns.
pub fn push_padded(out: &mut String, line: &str, width: usize) {
    out.push_str(line);
    let pad = width.saturating_sub(display_width(line));
    out.extend(std::iter::repeat_n(' ', pad));
}

/// Width of a cell: the display width of its longest display line.
#[must_use]
pub fn cell_width(cell: &str) -> usize {
    cell.split('\n').map(display_width).max().unwrap_or(0)
}

/// Number of physical lines a row occupies. Zero for an empty row.
#[must_use]
pub fn row_height(row: &[String]) -> usize {
    row.iter()
        .map(|cell| cell.split('\n').count())
        .max()
        .unwrap_or(0)
}

/// Maximum column widths over the labels and every row.
///
/// The column count is the longest of the label sequence and all rows, so a
/// ragged table still gets one width per column it uses.
#[must_use]
pub fn find_widths(labels: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    for row in std::iter::once(labels).chain(rows.iter().map(Vec::as_slice)) {
        if widths.len() < row.len() {
            widths.resize(row.len(), 0);
        }
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    widths
}

/// Pick display line `line_num` of a cell, or an empty string once the cell
/// has run out of lines.
fn pick_line<'a>(lines: &[&'a str], line_num: usize) -> &'a str {
    lines.get(line_num).copied().unwrap_or("")
}

/// Format one logical row into its physical lines.
///
/// Every physical line is prefixed with `indent` and ends with `\n`. Cells
/// missing from a short row render as blanks. An empty row yields no text.
#[must_use]
pub fn format_row(row: &[String], widths: &[usize], style: Style, indent: &str) -> String {
    let mut text = String::new();
    if row.is_empty() {
        return text;
    }

    let columns: Vec<Vec<&str>> = (0..widths.len())
        .map(|i| row.get(i).map_or_else(Vec::new, |cell| cell.split('\n').collect()))
        .collect();

    let height = row_height(row);
    tracing::trace!("Formatting row of {} cells over {height} lines", row.len());

    for line_num in 0..height {
        let picks: Vec<&str> = columns
            .iter()
            .map(|lines| pick_line(lines, line_num))
            .collect();
        text.push_str(indent);
        text.push_str(&style.format_line(&picks, widths));
        text.push('\n');
    }

    text
}
