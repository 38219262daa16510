//! Fixed-layout plain-text payslip.

use payroll_core::{PayslipBreakdown, PayslipLine};
use payroll_model::ProcessedRecord;
use payroll_transform::format_money;

const PAGE_WIDTH: usize = 56;
const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 14;
const FIELD_LABEL_WIDTH: usize = 22;

/// Employer block printed above the payslip title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipTemplate {
    pub employer: String,
    /// Address, tax ID and phone; printed under the employer when non-empty.
    pub employer_details: String,
    /// City printed before the period on the closing line.
    pub city: String,
}

impl Default for PayslipTemplate {
    fn default() -> Self {
        Self {
            employer: "SERVICIOS ASISTENCIALES SANTA BEATRIZ SAC".to_string(),
            employer_details: "JR. RAMON DAGNINO 227 - JESUS MARIA - RUC 20566148006".to_string(),
            city: "Lima".to_string(),
        }
    }
}

/// Renders a payslip with the default employer block.
pub fn render_payslip(record: &ProcessedRecord) -> String {
    render_payslip_with(record, &PayslipTemplate::default())
}

/// Renders a payslip for one record.
pub fn render_payslip_with(record: &ProcessedRecord, template: &PayslipTemplate) -> String {
    let employee = &record.employee;
    let breakdown = PayslipBreakdown::from_record(record);
    let mut out: Vec<String> = Vec::new();

    out.push(center(&template.employer));
    if !template.employer_details.trim().is_empty() {
        out.push(center(&template.employer_details));
    }
    out.push(center("BOLETA DE PAGO"));
    out.push("=".repeat(PAGE_WIDTH));

    let fields = [
        ("APELLIDOS Y NOMBRES", employee.full_name.clone()),
        ("DNI", employee.dni.clone()),
        ("CARGO U OCUPACIÓN", employee.job_title.clone()),
        ("AREA DE TRABAJO", employee.area.clone()),
        ("FECHA DE NACIMIENTO", employee.birth_date.clone()),
        ("FECHA DE INGRESO", employee.hire_date.clone()),
        ("FECHA DE CESE", employee.termination_date.clone()),
        ("REM.MENSUAL", format_money(employee.monthly_remuneration)),
        ("SISTEMA PENSIONARIO", employee.pension_system.clone()),
        ("REGIMEN PENSIÓN", employee.pension_regime.to_string()),
        ("DIAS LABORADOS", employee.days_worked.to_string()),
        ("DIAS DE VACACIONES", employee.vacation_days.to_string()),
        ("DIAS DE FALTAS", employee.absence_days.to_string()),
        ("HORAS EXTRAS", format_money(employee.overtime_hours)),
        ("PERIODO DE CÁLCULO", employee.period_string.clone()),
    ];
    for (label, value) in fields {
        out.push(
            format!("{label:<FIELD_LABEL_WIDTH$}: {value}")
                .trim_end()
                .to_string(),
        );
    }

    out.push("-".repeat(PAGE_WIDTH));
    out.push(render_section(
        "INGRESOS",
        &breakdown.income,
        "TOTAL INGRESOS",
        breakdown.total_income,
    ));
    out.push(String::new());
    out.push(render_section(
        "DESCUENTOS",
        &breakdown.deductions,
        "TOTAL DESCUENTOS",
        breakdown.total_deductions,
    ));
    out.push(String::new());
    out.push(render_section(
        "APORTACIONES",
        &breakdown.contributions,
        "TOTAL APORTACIONES",
        breakdown.total_contributions,
    ));
    out.push("=".repeat(PAGE_WIDTH));
    out.push(amount_line("NETO A PAGAR", breakdown.net_pay).trim_start().to_string());
    out.push(String::new());
    out.push(format!(
        "{:>PAGE_WIDTH$}",
        format!("{}, {}", template.city, employee.period_string)
    ));
    out.push(String::new());
    out.push(String::new());
    out.push(format!("{:<28}{}", "_".repeat(24), "_".repeat(24)));
    out.push(format!("{:<28}{}", "Firma y Sello del Empleador", "Firma del Trabajador"));
    out.push(format!("{:<28}DNI: {}", "", employee.dni));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn center(text: &str) -> String {
    format!("{text:^PAGE_WIDTH$}").trim_end().to_string()
}

fn amount_line(label: &str, amount: f64) -> String {
    format!(
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_money(amount)
    )
}

/// One titled column of the payslip followed by its total.
fn render_section(title: &str, lines: &[PayslipLine], total_label: &str, total: f64) -> String {
    let mut out = vec![title.to_string()];
    out.extend(lines.iter().map(|line| amount_line(line.label, line.amount)));
    out.push(amount_line(total_label, total));
    out.join("\n")
}
