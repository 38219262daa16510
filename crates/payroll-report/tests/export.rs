use std::io::{Cursor, Read};

use payroll_model::{EmployeeProfile, PayrollFigures, PensionRegime, PeriodValue, ProcessedRecord};
use payroll_report::{
    PayslipTemplate, export_archive, render_payslip, render_payslip_with, write_archive_file,
};

fn record(index: usize, dni: &str, valid: bool) -> ProcessedRecord {
    ProcessedRecord {
        id: ProcessedRecord::record_id(dni, index),
        row_index: index,
        employee: EmployeeProfile {
            full_name: format!("EMPLEADO {index}"),
            employee_id: dni.to_string(),
            dni: dni.to_string(),
            job_title: "TECNICO".to_string(),
            area: "GENERAL".to_string(),
            days_worked: 30,
            pension_system: "INTEGRA".to_string(),
            pension_regime: PensionRegime::Spp,
            period_string: "07/2025".to_string(),
            ..EmployeeProfile::default()
        },
        payroll: PayrollFigures {
            base_salary: 1130.0,
            gratification: 1130.0,
            spp_contribution: 113.0,
            spp_insurance: 15.48,
            spp_commission: 1.7,
            spp_total: 130.18,
            essalud: 101.7,
            pension_regime: PensionRegime::Spp,
            period_string: "07/2025".to_string(),
            ..PayrollFigures::default()
        },
        period: PeriodValue::valid(2025, 7),
        is_valid: valid,
        errors: if valid {
            Vec::new()
        } else {
            vec!["missing name".to_string()]
        },
    }
}

fn batch() -> Vec<ProcessedRecord> {
    vec![
        record(0, "40000001", true),
        record(1, "40000002", false),
        record(2, "40000003", true),
        record(3, "", false),
        record(4, "40000005", true),
    ]
}

#[test]
fn exports_only_valid_records() {
    let mut buffer = Cursor::new(Vec::new());
    let summary = export_archive(&batch(), &mut buffer, &PayslipTemplate::default()).unwrap();
    assert_eq!(summary.skipped, 2);
    insta::assert_json_snapshot!(summary.written, @r#"
    [
      "Boletas/Boleta_40000001_07-2025.txt",
      "Boletas/Boleta_40000003_07-2025.txt",
      "Boletas/Boleta_40000005_07-2025.txt"
    ]
    "#);

    let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
    assert_eq!(archive.len(), 3);

    let mut text = String::new();
    archive
        .by_name("Boletas/Boleta_40000003_07-2025.txt")
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    assert!(text.contains("EMPLEADO 2"));
    assert!(text.contains("DNI: 40000003"));
}

#[test]
fn writes_archive_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Boletas_Pago_2025-07-31.zip");
    let summary = write_archive_file(&batch(), &path, &PayslipTemplate::default()).unwrap();
    assert_eq!(summary.written.len(), 3);
    assert!(path.metadata().unwrap().len() > 0);
}

#[test]
fn empty_batch_still_produces_an_archive() {
    let mut buffer = Cursor::new(Vec::new());
    let summary = export_archive(&[], &mut buffer, &PayslipTemplate::default()).unwrap();
    assert!(summary.written.is_empty());
    let archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
    assert_eq!(archive.len(), 0);
}

#[test]
fn payslip_carries_totals_and_signatures() {
    let text = render_payslip(&record(0, "40000001", true));
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].trim() == "SERVICIOS ASISTENCIALES SANTA BEATRIZ SAC");
    assert!(lines.iter().any(|l| l.trim() == "BOLETA DE PAGO"));
    assert!(lines.contains(&"APELLIDOS Y NOMBRES   : EMPLEADO 0"));
    assert!(lines.contains(&"REGIMEN PENSIÓN       : SPP"));
    assert!(lines.contains(&"FECHA DE CESE         :"));

    let total_income = lines
        .iter()
        .find(|l| l.trim_start().starts_with("TOTAL INGRESOS"))
        .unwrap();
    assert!(total_income.ends_with("2260.00"));
    let total_deductions = lines
        .iter()
        .find(|l| l.trim_start().starts_with("TOTAL DESCUENTOS"))
        .unwrap();
    assert!(total_deductions.ends_with("130.18"));
    let net = lines.iter().find(|l| l.starts_with("NETO A PAGAR")).unwrap();
    assert!(net.ends_with("2129.82"));

    assert!(lines.iter().any(|l| l.trim() == "Lima, 07/2025"));
    assert!(lines.iter().any(|l| l.contains("Firma y Sello del Empleador")));
    assert_eq!(lines.last().unwrap().trim(), "DNI: 40000001");
}

#[test]
fn custom_template() {
    let template = PayslipTemplate {
        employer: "CLINICA EJEMPLO SAC".to_string(),
        employer_details: String::new(),
        city: "Arequipa".to_string(),
    };
    let text = render_payslip_with(&record(0, "1", true), &template);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0].trim(), "CLINICA EJEMPLO SAC");
    assert_eq!(lines[1].trim(), "BOLETA DE PAGO");
    assert!(text.contains("Arequipa, 07/2025"));
}
