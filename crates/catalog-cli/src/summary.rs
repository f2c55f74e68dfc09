//! Statistics rendering.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_core::{Statistics, Tally};

/// Headline lines: count, total quota, mean duration to two decimals.
///
/// Empty when nothing was counted.
pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let Some(mean) = stats.mean_duration() else {
        return Vec::new();
    };
    vec![
        format!("Programs: {}", stats.totals.records),
        format!("Total quota: {}", stats.totals.total_quota),
        format!("Mean duration (years): {mean:.2}"),
    ]
}

/// Per-file breakdown table.
pub fn statistics_table(stats: &Statistics, base_dir: &Path) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Programs"),
        header_cell("Total quota"),
        header_cell("Mean duration"),
        header_cell("Malformed"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for file in &stats.files {
        let display = file
            .path
            .strip_prefix(base_dir)
            .unwrap_or(file.path.as_path())
            .display()
            .to_string();
        table.add_row(tally_row(Cell::new(display), &file.tally));
    }
    table.add_row(tally_row(
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        &stats.totals,
    ));
    table
}

fn tally_row(label: Cell, tally: &Tally) -> Vec<Cell> {
    let mean = match tally.mean_duration() {
        Some(mean) => Cell::new(format!("{mean:.2}")),
        None => dim_cell("-"),
    };
    let malformed = if tally.malformed > 0 {
        Cell::new(tally.malformed)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(tally.malformed)
    };
    vec![
        label,
        Cell::new(tally.records),
        Cell::new(tally.total_quota),
        mean,
        malformed,
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
