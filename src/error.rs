//! Error types for table rendering and table documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the rendering library.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested table style is not one of `simple` or `complex`.
    #[error("unknown table style: {0:?} (expected \"simple\" or \"complex\")")]
    UnknownStyle(String),

    /// A row does not have one cell per label.
    #[error("row {row} has {cells} cells, expected {columns}")]
    RaggedRow {
        /// Zero-based index of the offending row
        row: usize,
        /// Number of cells in that row
        cells: usize,
        /// Number of labels
        columns: usize,
    },

    /// A table document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// A table document is not valid TOML or has the wrong shape.
    #[error("invalid table document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
