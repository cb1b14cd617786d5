//! Render options and table documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::table::{Style, Table};

/// How a table is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub style: Style,
    /// Prefix for every emitted line.
    #[serde(default)]
    pub indent: String,
}

/// A table stored as TOML.
///
/// ```toml
/// labels = ["Name", "Type"]
/// rows = [["one,\ntwo", "NX_FLOAT"]]
///
/// [render]
/// style = "complex"
/// indent = "    "
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDocument {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl TableDocument {
    /// Load a table document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_toml(&contents)?;
        tracing::debug!(
            "Loaded {} with {} labels and {} rows",
            path.display(),
            document.labels.len(),
            document.rows.len()
        );
        Ok(document)
    }

    /// Parse a table document from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Split into the table and its render options.
    #[must_use]
    pub fn into_parts(self) -> (Table, RenderOptions) {
        let mut table = Table::new();
        table.set_labels(self.labels);
        for row in self.rows {
            table.add_row(row);
        }
        (table, self.render)
    }
}
