//! Per-row normalization into a [`ProcessedRecord`].

use chrono::NaiveDate;
use tracing::trace;

use payroll_model::{
    CanonicalField, ColumnMap, EmployeeProfile, PayrollFigures, PensionRegime, ProcessedRecord,
};
use payroll_transform::{DEFAULT_DAYS_WORKED, extract_period_at, parse_day_count, parse_money};

use crate::pension::classify_regime;

pub const ERR_MISSING_NAME: &str = "missing name";
pub const ERR_MISSING_DNI: &str = "missing national ID";
pub const ERR_MISSING_PERIOD: &str = "missing calculation period";
pub const ERR_INVALID_PERIOD: &str = "invalid period format";

const DEFAULT_JOB_TITLE: &str = "EMPLEADO";
const DEFAULT_AREA: &str = "GENERAL";
const DEFAULT_PERIOD_LABEL: &str = "MENSUAL";

/// Row accessor bound to one file's column map.
struct RowView<'a> {
    row: &'a [String],
    columns: &'a ColumnMap,
}

impl<'a> RowView<'a> {
    fn raw(&self, field: CanonicalField) -> Option<&'a str> {
        self.columns.cell(self.row, field)
    }

    /// Trimmed cell text; empty when the column is unresolved.
    fn text(&self, field: CanonicalField) -> String {
        self.raw(field).map(str::trim).unwrap_or_default().to_string()
    }

    /// Trimmed cell text, or `default` when the column is unresolved.
    fn text_or(&self, field: CanonicalField, default: &str) -> String {
        self.raw(field).map_or(default, str::trim).to_string()
    }

    fn money(&self, field: CanonicalField) -> f64 {
        parse_money(self.raw(field))
    }

    fn days(&self, field: CanonicalField, default: i64) -> i64 {
        parse_day_count(self.raw(field), default)
    }
}

/// Normalizes one data row.
///
/// Never fails: problems are listed in `errors`, in a fixed order, and the
/// record is marked invalid.
pub fn normalize_row(
    row: &[String],
    columns: &ColumnMap,
    row_index: usize,
    reference: NaiveDate,
) -> ProcessedRecord {
    let view = RowView { row, columns };

    let full_name = view.text(CanonicalField::FullName);
    let dni = view.text(CanonicalField::Dni);
    let period_string = view.text(CanonicalField::Period);
    let period = extract_period_at(&period_string, reference);

    let mut errors = Vec::new();
    if full_name.is_empty() {
        errors.push(ERR_MISSING_NAME.to_string());
    }
    if dni.is_empty() {
        errors.push(ERR_MISSING_DNI.to_string());
    }
    if period_string.is_empty() {
        errors.push(ERR_MISSING_PERIOD.to_string());
    } else if !period.is_valid {
        errors.push(ERR_INVALID_PERIOD.to_string());
    }

    let seasonal = |field| {
        if period.is_bonus_month() {
            view.money(field)
        } else {
            0.0
        }
    };
    let gratification = seasonal(CanonicalField::Gratification);
    let bono_30334 = seasonal(CanonicalField::Bono30334);
    let advances = seasonal(CanonicalField::Advances);

    let overtime_specific = view.money(CanonicalField::Overtime25);
    let overtime_25 = if overtime_specific == 0.0 {
        view.money(CanonicalField::Overtime)
    } else {
        overtime_specific
    };

    let spp_contribution = view.money(CanonicalField::SppAporte);
    let spp_insurance = view.money(CanonicalField::SppPrima);
    let spp_commission = view.money(CanonicalField::SppComision);
    let spp_total = spp_contribution + spp_insurance + spp_commission;
    let onp = view.money(CanonicalField::Onp);

    let pension_name = view.text(CanonicalField::Afp);
    let regime = classify_regime(&pension_name, onp, spp_total);

    let employee = EmployeeProfile {
        full_name,
        employee_id: dni.clone(),
        dni: dni.clone(),
        job_title: view.text_or(CanonicalField::JobTitle, DEFAULT_JOB_TITLE),
        area: view.text_or(CanonicalField::Area, DEFAULT_AREA),
        hire_date: view.text(CanonicalField::HireDate),
        termination_date: view.text(CanonicalField::TerminationDate),
        birth_date: view.text(CanonicalField::BirthDate),
        days_worked: view.days(CanonicalField::DaysWorked, DEFAULT_DAYS_WORKED),
        vacation_days: view.days(CanonicalField::VacationDays, 0),
        absence_days: view.days(CanonicalField::AbsenceDays, 0),
        overtime_hours: view.money(CanonicalField::OvertimeHours),
        monthly_remuneration: view.money(CanonicalField::MonthlyRemuneration),
        pension_system: if pension_name.is_empty() {
            regime.as_str().to_string()
        } else {
            pension_name.clone()
        },
        pension_regime: regime,
        period_string: if period_string.is_empty() {
            DEFAULT_PERIOD_LABEL.to_string()
        } else {
            period_string.clone()
        },
    };

    let payroll = PayrollFigures {
        base_salary: view.money(CanonicalField::BaseSalary),
        vacation_pay: view.money(CanonicalField::VacationRemuneration),
        overtime_25,
        overtime_35: view.money(CanonicalField::Overtime35),
        overtime_100: view.money(CanonicalField::Overtime100),
        family_allowance: view.money(CanonicalField::FamilyAllowance),
        extraordinary_bonus: view.money(CanonicalField::Bonus),
        regular_bonus: 0.0,
        // OTROS INGRESOS is resolved for reporting only; the figure stays 0.
        other_income: 0.0,
        gratification,
        bono_30334,
        advances,
        spp_contribution,
        spp_insurance,
        spp_commission,
        spp_total: if regime == PensionRegime::Spp { spp_total } else { 0.0 },
        onp: if regime == PensionRegime::Snp { onp } else { 0.0 },
        income_tax: view.money(CanonicalField::IncomeTax),
        other_deductions: view.money(CanonicalField::OtherDeductions),
        lateness: view.money(CanonicalField::Lateness),
        essalud: view.money(CanonicalField::Essalud),
        pension_system: pension_name,
        pension_regime: regime,
        period_string,
    };

    let is_valid = errors.is_empty();
    trace!(row = row_index, valid = is_valid, regime = %regime, "normalized row");

    ProcessedRecord {
        id: ProcessedRecord::record_id(&dni, row_index),
        row_index,
        employee,
        payroll,
        period,
        is_valid,
        errors,
    }
}
