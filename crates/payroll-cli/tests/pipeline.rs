//! Integration tests for the pipeline module.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use payroll_cli::pipeline::{export_payslips, inspect_columns, process_file};
use payroll_core::NormalizeOptions;
use payroll_model::CanonicalField;
use payroll_report::PayslipTemplate;
use tempfile::TempDir;

const PLANILLA: &str = "APELLIDOS Y NOMBRES;DNI;PERIODO DE CÁLCULO;REMUNERACIÓN O JORNAL BÁSICO;AFP;ONP\n\
QUISPE MAMANI ROSA;45879632;DICIEMBRE 2025;1.130,00;PRIMA;\n\
HUAMAN TORRES LUIS;40125896;DICIEMBRE 2025;2.500,50;ONP;325,07\n\
;;;;;\n\
SIN DNI;;DICIEMBRE 2025;900;;\n";

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn options() -> NormalizeOptions {
    NormalizeOptions::new().with_reference_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
}

#[test]
fn process_counts_valid_and_invalid_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "planilla.csv", PLANILLA);
    let result = process_file(&path, &options()).unwrap();
    assert_eq!(result.records.len(), 4);
    assert_eq!(result.valid_count(), 2);
    assert_eq!(result.invalid_count(), 2);
    assert_eq!(
        result.records[2].errors,
        vec!["missing name", "missing national ID", "missing calculation period"]
    );
    assert_eq!(result.records[2].id, "-2");
    assert_eq!(result.records[3].errors, vec!["missing national ID"]);
    assert_eq!(result.records[3].id, "-3");
}

#[test]
fn process_reports_fatal_column_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "otro.csv", "CARGO,BASICO\nMEDICO,3000\n");
    let err = process_file(&path, &options()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("required columns not detected (fullName, dni)"));
}

#[test]
fn columns_report_lists_matches_and_gaps() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "planilla.csv", PLANILLA);
    let report = inspect_columns(&path).unwrap();
    assert!(report.missing_required.is_empty());
    assert_eq!(report.headers.len(), 6);

    let fields: Vec<&str> = report.matches.iter().map(|m| m.field.key()).collect();
    insta::assert_json_snapshot!(fields, @r#"
    [
      "fullName",
      "dni",
      "period",
      "baseSalary",
      "afp",
      "onp"
    ]
    "#);
    assert!(report.unresolved.contains(&CanonicalField::Essalud));
}

#[test]
fn export_writes_archive_for_valid_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "planilla.csv", PLANILLA);
    let result = process_file(&path, &options()).unwrap();
    let output = dir.path().join("boletas.zip");
    let export = export_payslips(&result, Some(&output), &PayslipTemplate::default()).unwrap();
    assert_eq!(export.archive, output);
    assert_eq!(
        export.summary.written,
        vec![
            "Boletas/Boleta_45879632_DICIEMBRE 2025.txt",
            "Boletas/Boleta_40125896_DICIEMBRE 2025.txt"
        ]
    );
    assert_eq!(export.summary.skipped, 2);
    assert!(Path::new(&output).exists());
}

#[test]
fn export_refuses_when_nothing_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "vacia.csv", "TRABAJADOR,DNI\n,\nANA,\n");
    let result = process_file(&path, &options()).unwrap();
    let err = export_payslips(&result, None, &PayslipTemplate::default()).unwrap_err();
    assert!(err.to_string().contains("no valid records"));
}
