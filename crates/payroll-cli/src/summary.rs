use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use payroll_cli::types::{ColumnReport, ExportResult, ProcessResult};
use payroll_core::PayslipBreakdown;
use payroll_map::MatchKind;
use payroll_model::ProcessedRecord;
use payroll_transform::format_money;

pub fn print_process_summary(result: &ProcessResult, invalid_only: bool) {
    println!("Source: {}", result.source.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("DNI"),
        header_cell("Name"),
        header_cell("Period"),
        header_cell("Regime"),
        header_cell("Income"),
        header_cell("Net"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_net = 0.0;
    for record in &result.records {
        let slip = PayslipBreakdown::from_record(record);
        if record.is_valid {
            total_net += slip.net_pay;
        }
        if invalid_only && record.is_valid {
            continue;
        }
        table.add_row(vec![
            Cell::new(record.row_index + 1),
            Cell::new(&record.employee.dni),
            Cell::new(&record.employee.full_name),
            Cell::new(&record.employee.period_string),
            Cell::new(record.payroll.pension_regime),
            Cell::new(format_money(slip.total_income)),
            Cell::new(format_money(slip.net_pay)),
            status_cell(record),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        dim_cell("-"),
        Cell::new("TOTAL (valid rows)")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format_money(total_net)).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} valid / {} invalid",
            result.valid_count(),
            result.invalid_count()
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_column_report(report: &ColumnReport) {
    println!("Source: {}", report.source.display());
    println!("Headers: {}", report.headers.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Header"),
        header_cell("Column"),
        header_cell("Variant"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for hit in &report.matches {
        let kind = match hit.kind {
            MatchKind::Exact => Cell::new("exact").fg(Color::Green),
            MatchKind::Contains => Cell::new("contains").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(hit.field),
            Cell::new(&hit.header),
            Cell::new(hit.index + 1),
            Cell::new(&hit.variant),
            kind,
        ]);
    }
    println!("{table}");

    if !report.unresolved.is_empty() {
        let names: Vec<&str> = report.unresolved.iter().map(|field| field.key()).collect();
        println!("Unresolved: {}", names.join(", "));
    }
    if !report.missing_required.is_empty() {
        let names: Vec<&str> = report
            .missing_required
            .iter()
            .map(|field| field.key())
            .collect();
        println!("Missing required: {}", names.join(", "));
    }
}

pub fn print_export_summary(result: &ExportResult) {
    println!("Archive: {}", result.archive.display());
    println!(
        "Payslips: {} written, {} invalid rows skipped",
        result.summary.written.len(),
        result.summary.skipped
    );
}

fn status_cell(record: &ProcessedRecord) -> Cell {
    if record.is_valid {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new(record.errors.join("; ")).fg(Color::Red)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(150);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
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
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
