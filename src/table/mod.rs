//! Tables with multi-line cells, rendered as reStructuredText.

pub mod layout;
mod style;

use serde::{Deserialize, Serialize};

use crate::config::RenderOptions;
use crate::error::{Error, Result};

pub use style::Style;

/// A table with a header row and data rows. No row or column spans.
///
/// Each cell may span several lines, separated by `\n`.
///
/// # Example
/// ```
/// use rest_table::{Style, Table};
///
/// let mut table = Table::new();
/// table.set_labels(["Name", "Type"]);
/// table.add_row(["one,\ntwo", "NX_FLOAT"]);
///
/// assert_eq!(
///     table.render(Style::Complex, ""),
///     "+------+----------+\n\
///      | Name | Type     |\n\
///      +======+==========+\n\
///      | one, | NX_FLOAT |\n\
///      | two  |          |\n\
///      +------+----------+\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table: no labels, no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the header labels. An empty sequence means "no header".
    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    /// Append a data row.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Header labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Data rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns: the longest of the labels and every row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.labels.len()))
            .max()
            .unwrap_or(0)
    }

    /// Column widths, accounting for line breaks inside cells.
    #[must_use]
    pub fn widths(&self) -> Vec<usize> {
        layout::find_widths(&self.labels, &self.rows)
    }

    /// Check that every row has exactly one cell per label.
    ///
    /// Rendering tolerates ragged rows by padding them with blank cells; use
    /// this when a ragged table should be treated as a mistake instead. A
    /// table without labels always passes.
    pub fn validate(&self) -> Result<()> {
        let columns = self.labels.len();
        if columns == 0 {
            return Ok(());
        }

        match self.rows.iter().position(|row| row.len() != columns) {
            Some(row) => Err(Error::RaggedRow {
                row,
                cells: self.rows[row].len(),
                columns,
            }),
            None => Ok(()),
        }
    }

    /// Render the table in the given style, prefixing every line with `indent`.
    #[must_use]
    pub fn render(&self, style: Style, indent: &str) -> String {
        let widths = self.widths();
        tracing::debug!("Rendering {style} table, column widths {widths:?}");

        let columns = widths.len();
        for (i, row) in self.rows.iter().enumerate() {
            if !row.is_empty() && row.len() != columns {
                tracing::warn!("Row {i} has {} of {columns} cells, padding with blanks", row.len());
            }
        }

        style.assemble(&self.labels, &self.rows, &widths, indent)
    }

    /// Render the table, selecting the style by name (`simple` or `complex`).
    pub fn render_named(&self, style: &str, indent: &str) -> Result<String> {
        let style: Style = style.parse()?;
        Ok(self.render(style, indent))
    }

    /// Render the table with options loaded from a table document.
    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        self.render(options.style, &options.indent)
    }

    /// Sample table with multi-line labels, a five-line cell and an empty
    /// trailing cell.
    #[must_use]
    pub fn sample() -> Self {
        let mut table = Self::new();
        table.set_labels([
            "Name\nand\nAttributes",
            "Type",
            "Units",
            "Description\n(and Occurrences)",
        ]);
        table.add_row(["one,\ntwo", "buckle my", "shoe.\n\n\nthree,\nfour", ""]);
        table.add_row(["class", "NX_FLOAT", "..", ".."]);
        table
    }
}
