//! Normalized payroll records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pension regime an employee contributes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PensionRegime {
    /// Sistema Nacional de Pensiones (public, ONP withholding).
    #[default]
    #[serde(rename = "SNP")]
    Snp,
    /// Sistema Privado de Pensiones (AFP contribution, premium and commission).
    #[serde(rename = "SPP")]
    Spp,
}

impl PensionRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snp => "SNP",
            Self::Spp => "SPP",
        }
    }
}

impl fmt::Display for PensionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payroll month a record pertains to.
///
/// When `is_valid` is false the year and month are a fallback (the reference
/// date), not an interpretation of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodValue {
    pub year: i32,
    pub month: u32,
    pub is_valid: bool,
}

impl PeriodValue {
    pub fn valid(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            is_valid: true,
        }
    }

    pub fn fallback(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            is_valid: false,
        }
    }

    /// July and December carry gratification, the Law 30334 bonus and advances.
    pub fn is_bonus_month(&self) -> bool {
        matches!(self.month, 7 | 12)
    }
}

/// Identity and descriptive data for one employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub full_name: String,
    pub employee_id: String,
    pub dni: String,
    pub job_title: String,
    pub area: String,
    pub hire_date: String,
    pub termination_date: String,
    pub birth_date: String,
    pub days_worked: i64,
    pub vacation_days: i64,
    pub absence_days: i64,
    pub overtime_hours: f64,
    pub monthly_remuneration: f64,
    pub pension_system: String,
    pub pension_regime: PensionRegime,
    pub period_string: String,
}

/// Itemized income, deductions and employer contributions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollFigures {
    // Income
    pub base_salary: f64,
    pub vacation_pay: f64,
    pub overtime_25: f64,
    pub overtime_35: f64,
    pub overtime_100: f64,
    pub family_allowance: f64,
    pub extraordinary_bonus: f64,
    pub regular_bonus: f64,
    pub other_income: f64,
    pub gratification: f64,
    pub bono_30334: f64,

    // Deductions
    pub advances: f64,
    pub spp_contribution: f64,
    pub spp_insurance: f64,
    pub spp_commission: f64,
    pub spp_total: f64,
    pub onp: f64,
    pub income_tax: f64,
    pub other_deductions: f64,
    pub lateness: f64,

    // Employer contributions
    pub essalud: f64,

    pub pension_system: String,
    pub pension_regime: PensionRegime,
    pub period_string: String,
}

/// One normalized input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// `"{dni}-{row_index}"`; unique even when a DNI repeats in one file.
    pub id: String,
    pub row_index: usize,
    pub employee: EmployeeProfile,
    pub payroll: PayrollFigures,
    pub period: PeriodValue,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ProcessedRecord {
    pub fn record_id(dni: &str, row_index: usize) -> String {
        format!("{dni}-{row_index}")
    }
}
