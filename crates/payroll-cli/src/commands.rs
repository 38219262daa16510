use anyhow::{Context, Result};

use payroll_core::NormalizeOptions;
use payroll_cli::pipeline::{export_payslips, inspect_columns, process_file};
use payroll_cli::types::{ColumnReport, ExportResult, ProcessResult};
use payroll_report::PayslipTemplate;

use crate::cli::{ColumnsArgs, ExportArgs, NormalizeArgs, ProcessArgs};

fn normalize_options(args: &NormalizeArgs) -> NormalizeOptions {
    let mut options = NormalizeOptions::new().with_parallel(!args.sequential);
    if let Some(date) = args.reference_date {
        options = options.with_reference_date(date);
    }
    options
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    process_file(&args.input.csv, &normalize_options(&args.input))
}

pub fn print_json(result: &ProcessResult, invalid_only: bool) -> Result<()> {
    let records: Vec<_> = result
        .records
        .iter()
        .filter(|record| !invalid_only || !record.is_valid)
        .collect();
    let json = serde_json::to_string_pretty(&records).context("serialize records")?;
    println!("{json}");
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnReport> {
    inspect_columns(&args.csv)
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let result = process_file(&args.input.csv, &normalize_options(&args.input))?;
    let mut template = PayslipTemplate::default();
    if let Some(employer) = &args.employer {
        template.employer.clone_from(employer);
        template.employer_details.clear();
    }
    export_payslips(&result, args.output.as_deref(), &template)
}
