//! Human-facing rendering: tables, value formatting, histograms.

pub mod format;
pub mod histogram;
pub mod table;

pub use histogram::render_histogram;
pub use table::{edge_table, list_table};
