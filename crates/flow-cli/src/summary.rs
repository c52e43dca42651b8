use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flow_cli::{FileStatus, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    if result.files.is_empty() {
        println!("No CSV files found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Score"),
        header_cell("Report"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for outcome in &result.files {
        let name = outcome
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| outcome.file.display().to_string());
        match &outcome.status {
            FileStatus::Profiled {
                rows,
                columns,
                score,
                report,
            } => {
                let report_name = report
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
                    Cell::new(rows),
                    Cell::new(columns),
                    score_cell(*score),
                    Cell::new(report_name),
                ]);
            }
            FileStatus::Skipped { reason } => {
                table.add_row(vec![
                    Cell::new(name).fg(Color::DarkGrey),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!(
            "{} profiled, {} skipped",
            result.profiled_count(),
            result.skipped_count()
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn score_cell(score: f64) -> Cell {
    let color = if score >= 8.0 {
        Color::Green
    } else if score >= 6.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{score:.1}"))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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
