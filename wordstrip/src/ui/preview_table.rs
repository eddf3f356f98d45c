// wordstrip/src/ui/preview_table.rs
//! Before/after table of product names.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::{self, Write};

use wordstrip_core::{DERIVED_FIELD, PreviewRow, SOURCE_FIELD};

/// Builds the preview table, one numbered row per pair.
pub fn build_preview_table(rows: &[PreviewRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", SOURCE_FIELD, DERIVED_FIELD]);
    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), row.original.clone(), row.cleaned.clone()]);
    }
    table
}

/// Prints the table, noting `total_rows` when the preview is truncated.
pub fn print_preview<W: Write>(writer: &mut W, rows: &[PreviewRow], total_rows: usize) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(writer, "No rows to preview.");
    }
    writeln!(writer, "{}", build_preview_table(rows))?;
    if total_rows > rows.len() {
        writeln!(writer, "... showing {} of {} rows", rows.len(), total_rows)?;
    }
    Ok(())
}
