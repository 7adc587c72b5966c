//! Rendering of query results
//!
//! Supports the fixed-width console table and pretty JSON.

pub mod json;
pub mod table;

pub use json::render_json;
pub use table::{compute_column_widths, render, render_with, ColumnLimits, ColumnWidths, TableLimits};
