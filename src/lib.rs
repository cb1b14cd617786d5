//! Render tables with multi-line cells as reStructuredText.
//!
//! Two styles are supported: [`Style::Simple`] tables with `=` rules around
//! the header and at the end, and [`Style::Complex`] grid tables with a
//! border after every row. Cells may contain `\n`; each row is as tall as its
//! tallest cell.

pub mod config;
pub mod error;
pub mod table;

pub use config::{RenderOptions, TableDocument};
pub use error::{Error, Result};
pub use table::{Style, Table};
