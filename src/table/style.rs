//! reST table styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::layout::{format_row, push_padded};
use crate::error::Error;

/// Border convention used when rendering a table.
///
/// # Example
/// Simple:
/// ```text
/// ===== ====
/// Name  Type
/// ===== ====
/// class ..
/// ===== ====
/// ```
///
/// Complex:
/// ```text
/// +-------+------+
/// | Name  | Type |
/// +=======+======+
/// | class | ..   |
/// +-------+------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Header and footer `=` rules only.
    #[default]
    Simple,
    /// Full grid, fenced by a border after every row.
    Complex,
}

impl Style {
    /// Name used on the command line and in table documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }

    /// Format one physical line from per-column display lines.
    ///
    /// `cells` and `widths` have one entry per column.
    #[must_use]
    pub fn format_line(self, cells: &[&str], widths: &[usize]) -> String {
        match self {
            Self::Simple => {
                let mut line = String::new();
                for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    push_padded(&mut line, cell, width);
                }
                line
            }
            Self::Complex => {
                let mut line = String::from("|");
                for (cell, &width) in cells.iter().zip(widths) {
                    line.push(' ');
                    push_padded(&mut line, cell, width);
                    line.push_str(" |");
                }
                line
            }
        }
    }

    /// Assemble the full table text from labels, rows and precomputed widths.
    pub(crate) fn assemble(
        self,
        labels: &[String],
        rows: &[Vec<String>],
        widths: &[usize],
        indent: &str,
    ) -> String {
        match self {
            Self::Simple => simple(labels, rows, widths, indent),
            Self::Complex => complex(labels, rows, widths, indent),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "complex" => Ok(Self::Complex),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// `=` rule for the simple style: one run per column, space separated.
fn simple_rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&w| "=".repeat(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grid border for the complex style, filled with `-` or `=`.
fn grid_border(widths: &[usize], fill: char) -> String {
    let mut border = String::from("+");
    for &w in widths {
        border.extend(std::iter::repeat_n(fill, w + 2));
        border.push('+');
    }
    border
}

fn push_line(text: &mut String, indent: &str, line: &str) {
    text.push_str(indent);
    text.push_str(line);
    text.push('\n');
}

fn simple(labels: &[String], rows: &[Vec<String>], widths: &[usize], indent: &str) -> String {
    let rule = simple_rule(widths);
    let style = Style::Simple;

    let mut text = String::new();
    push_line(&mut text, indent, &rule);
    text.push_str(&format_row(labels, widths, style, indent));
    push_line(&mut text, indent, &rule);
    for row in rows {
        text.push_str(&format_row(row, widths, style, indent));
    }
    push_line(&mut text, indent, &rule);
    text
}

fn complex(labels: &[String], rows: &[Vec<String>], widths: &[usize], indent: &str) -> String {
    let separator = grid_border(widths, '-');
    let label_separator = grid_border(widths, '=');
    let style = Style::Complex;

    let mut text = String::new();
    push_line(&mut text, indent, &separator);
    text.push_str(&format_row(labels, widths, style, indent));
    push_line(&mut text, indent, &label_separator);
    for row in rows {
        text.push_str(&format_row(row, widths, style, indent));
        push_line(&mut text, indent, &separator);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_known_names() {
        assert_eq!("simple".parse::<Style>().unwrap(), Style::Simple);
        assert_eq!("complex".parse::<Style>().unwrap(), Style::Complex);
    }

    #[test]
    fn style_rejects_unknown_name() {
        let err = "grid".parse::<Style>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref s) if s == "grid"));
        assert!(err.to_string().contains("grid"));
    }

    #[test]
    fn style_names_round_trip_through_display() {
        for style in [Style::Simple, Style::Complex] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn default_style_is_simple() {
        assert_eq!(Style::default(), Style::Simple);
    }

    #[test]
    fn simple_rule_separates_columns_with_spaces() {
        assert_eq!(simple_rule(&[3, 1, 0, 2]), "=== =  ==");
        assert_eq!(simple_rule(&[]), "");
    }

    #[test]
    fn grid_border_pads_each_column_by_two() {
        assert_eq!(grid_border(&[1, 3], '-'), "+---+-----+");
        assert_eq!(grid_border(&[1, 3], '='), "+===+=====+");
        assert_eq!(grid_border(&[], '-'), "+");
    }

    #[test]
    fn format_line_left_justifies() {
        assert_eq!(Style::Simple.format_line(&["ab", "c"], &[4, 2]), "ab   c ");
        assert_eq!(Style::Complex.format_line(&["ab", "c"], &[4, 2]), "| ab   | c  |");
    }

    #[test]
    fn format_line_pads_wide_characters_by_columns() {
        assert_eq!(Style::Simple.format_line(&["漢", "c"], &[4, 1]), "漢   c");
        assert_eq!(Style::Complex.format_line(&["漢", "c"], &[4, 1]), "| 漢   | c |");
    }
}
