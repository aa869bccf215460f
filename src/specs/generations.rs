// src/specs/generations.rs
use scraper::ElementRef;

use crate::core::html;

/// Generation tables nested in the outer "Game locations" table, in page order.
///
/// Each outer row that carries a table inside its first `td` contributes that table.
/// Rows without one (spacers, headers) are skipped.
pub fn locate_generation_tables(outer: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    html::rows(outer)
        .filter_map(|row| html::find(row, "td"))
        .filter_map(|cell| html::find(cell, "table"))
        .collect()
}
