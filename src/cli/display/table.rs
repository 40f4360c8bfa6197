//! Table rendering wrappers around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::RevertEdge;
use crate::cli::display::format::{format_seniority, format_timestamp};

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render a list of revert edges as a table.
pub fn edge_table(edges: &[RevertEdge]) -> Table {
    let mut table = list_table(&[
        "time",
        "reverter",
        "reverted user",
        "reverter sen.",
        "reverted sen.",
        "gap",
    ]);
    for edge in edges {
        table.add_row(vec![
            Cell::new(format_timestamp(&edge.timestamp)),
            Cell::new(&edge.reverter),
            Cell::new(&edge.reverted_user),
            Cell::new(format_seniority(edge.reverter_seniority))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_seniority(edge.reverted_user_seniority))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_seniority(edge.seniority_gap()))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
