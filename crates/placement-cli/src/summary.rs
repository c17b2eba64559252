use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use placement_core::AnalyticsReport;
use placement_map::aliases;
use placement_model::{ColumnBinding, CountRow, MeanRow};
use placement_portal::{Dashboard, NoticeLevel};

/// Human-readable report: column binding, then one table per summary.
pub fn render_report(report: &AnalyticsReport) -> String {
    let binding = &report.binding;
    let result = &report.result;
    let mut out = String::new();
    let _ = writeln!(out, "File: {}", report.file_name);
    let _ = writeln!(out, "Rows: {}", report.row_count);
    let _ = writeln!(out, "Columns: {}", describe_binding(binding));

    let _ = writeln!(out, "\nPlacements by site:");
    let _ = writeln!(out, "{}", count_table(&binding.site_column, &result.by_site));
    let _ = writeln!(out, "\nPlacements by field:");
    let _ = writeln!(out, "{}", count_table(&binding.field_column, &result.by_field));

    match &binding.score_column {
        Some(score) => {
            let _ = writeln!(out, "\nMean score by site:");
            let _ = writeln!(
                out,
                "{}",
                mean_table(&binding.site_column, score, &result.score_avg)
            );
        }
        None => {
            let _ = writeln!(out, "\nNo score column found; mean scores skipped.");
        }
    }
    out
}

fn describe_binding(binding: &ColumnBinding) -> String {
    let field = if binding.field_is_fallback() {
        format!("{} (same as site)", binding.field_column)
    } else {
        binding.field_column.clone()
    };
    format!(
        "site = {}, field = {}, score = {}",
        binding.site_column,
        field,
        binding.score_column.as_deref().unwrap_or("-")
    )
}

fn count_table(column: &str, rows: &[CountRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(column), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![Cell::new(&row.key), Cell::new(row.count)]);
    }
    if rows.is_empty() {
        table.add_row(vec![dim_cell("no rows"), dim_cell("-")]);
    }
    table
}

fn mean_table(site_column: &str, score_column: &str, rows: &[MeanRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(site_column),
        header_cell(&format!("Mean {score_column}")),
        header_cell("Samples"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.key),
            Cell::new(format!("{:.2}", row.mean)),
            Cell::new(row.samples),
        ]);
    }
    if rows.is_empty() {
        table.add_row(vec![dim_cell("no numeric scores"), dim_cell("-"), dim_cell("-")]);
    }
    table
}

/// Recognized headers per role, in match priority.
pub fn render_aliases() -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Priority"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (role, names) in aliases() {
        for (index, name) in names.iter().enumerate() {
            let role_cell = if index == 0 {
                Cell::new(role).add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            table.add_row(vec![role_cell, Cell::new(index + 1), Cell::new(name)]);
        }
    }
    format!("{table}\n")
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let stats = &dashboard.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Registered students"),
        Cell::new(stats.registered_students),
    ]);
    table.add_row(vec![
        Cell::new("Registered mentors"),
        Cell::new(stats.registered_mentors),
    ]);
    table.add_row(vec![Cell::new("Success rate"), Cell::new(&stats.success_rate)]);
    table.add_row(vec![
        Cell::new("Placements done"),
        Cell::new(stats.placements_done),
    ]);
    format!("{table}\n")
}

pub fn print_notices(dashboard: &Dashboard) {
    for notice in &dashboard.notices {
        match notice.level {
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
            NoticeLevel::Success => eprintln!("{}", notice.message),
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
