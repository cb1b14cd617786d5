//! Command-line arguments for `rst-table`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rest_table::{RenderOptions, Style, Table, TableDocument};

#[derive(Parser, Debug)]
#[command(name = "rst-table")]
#[command(about = "Render a table as reStructuredText")]
#[command(version)]
pub struct Cli {
    /// Table document (TOML). Renders the built-in sample table when omitted.
    pub file: Option<PathBuf>,

    /// Table style: simple or complex
    #[arg(short, long)]
    pub style: Option<Style>,

    /// Indent every line by N spaces
    #[arg(short, long, value_name = "N")]
    pub indent: Option<usize>,
}

impl Cli {
    /// Load the table and merge command-line overrides into its options.
    pub fn resolve(&self) -> Result<(Table, RenderOptions)> {
        let (table, mut options) = match &self.file {
            Some(path) => TableDocument::load(path)
                .with_context(|| format!("Failed to load table from {}", path.display()))?
                .into_parts(),
            None => (Table::sample(), RenderOptions::default()),
        };

        if let Some(style) = self.style {
            options.style = style;
        }
        if let Some(n) = self.indent {
            options.indent = " ".repeat(n);
        }

        Ok((table, options))
    }
}
