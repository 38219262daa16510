//! Itemized payslip totals.
//!
//! The line items mirror the printed payslip: eleven income lines, ten
//! deduction lines and one employer contribution. Two deduction lines
//! (`DESCUENTO JUDICIAL`, `ESSALUD VIDA`) are not sourced from the file and
//! always read zero.

use serde::Serialize;

use payroll_model::{PensionRegime, ProcessedRecord};
use payroll_transform::round_to_cents;

/// One labelled amount on the payslip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayslipLine {
    pub label: &'static str,
    pub amount: f64,
}

impl PayslipLine {
    const fn new(label: &'static str, amount: f64) -> Self {
        Self { label, amount }
    }
}

/// The three payslip columns with their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayslipBreakdown {
    pub income: Vec<PayslipLine>,
    pub deductions: Vec<PayslipLine>,
    pub contributions: Vec<PayslipLine>,
    pub total_income: f64,
    pub total_deductions: f64,
    pub total_contributions: f64,
    /// Income minus deductions; employer contributions are not withheld.
    pub net_pay: f64,
}

impl PayslipBreakdown {
    /// Itemizes a record's figures.
    ///
    /// The three SPP component lines carry amounts only under SPP, so an SNP
    /// payslip prints them as zero. The components themselves stay reported
    /// individually on the record's
    /// [`PayrollFigures`](payroll_model::PayrollFigures) for every regime.
    pub fn from_record(record: &ProcessedRecord) -> Self {
        let pay = &record.payroll;
        let spp = |amount: f64| {
            if pay.pension_regime == PensionRegime::Spp {
                amount
            } else {
                0.0
            }
        };

        let income = vec![
            PayslipLine::new("REMUNERACIÓN O JORNAL BÁSICO", pay.base_salary),
            PayslipLine::new("REMUNERACIÓN VACACIONAL", pay.vacation_pay),
            PayslipLine::new("HORAS EXTRAS 25%", pay.overtime_25),
            PayslipLine::new("HORAS EXTRAS 35%", pay.overtime_35),
            PayslipLine::new("HORAS EXTRAS 100%", pay.overtime_100),
            PayslipLine::new("ASIGNACIÓN FAMILIAR", pay.family_allowance),
            PayslipLine::new("GRATIFICACIÓN", pay.gratification),
            PayslipLine::new("BONO TEMPORAL LEY 30334", pay.bono_30334),
            PayslipLine::new("BONIFICACION EXTRAORDINARIA", pay.extraordinary_bonus),
            PayslipLine::new("BONIFICACION REGULAR", pay.regular_bonus),
            PayslipLine::new("OTROS INGRESOS", pay.other_income),
        ];
        let deductions = vec![
            PayslipLine::new("ADELANTOS OTORGADOS", pay.advances),
            PayslipLine::new("DESCUENTO JUDICIAL", 0.0),
            PayslipLine::new("ESSALUD VIDA", 0.0),
            PayslipLine::new("SPP - APORTE OBLIGATORIA", spp(pay.spp_contribution)),
            PayslipLine::new("SPP - PRIMA SEGURO", spp(pay.spp_insurance)),
            PayslipLine::new("SPP - COMISION PORCENTUAL", spp(pay.spp_commission)),
            PayslipLine::new("SISTEMA NACIONAL DE PENSIONES ONP", pay.onp),
            PayslipLine::new("RENTA DE QUINTA CATEGORIA", pay.income_tax),
            PayslipLine::new("OTROS DESCUENTOS", pay.other_deductions),
            PayslipLine::new("TARDANZAS / PERMISOS / FALTAS", pay.lateness),
        ];
        let contributions = vec![PayslipLine::new("ESSALUD SEGURO REGULAR", pay.essalud)];

        let total_income = sum(&income);
        let total_deductions = sum(&deductions);
        let total_contributions = sum(&contributions);

        Self {
            net_pay: round_to_cents(total_income - total_deductions),
            income,
            deductions,
            contributions,
            total_income,
            total_deductions,
            total_contributions,
        }
    }
}

fn sum(lines: &[PayslipLine]) -> f64 {
    round_to_cents(lines.iter().map(|line| line.amount).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll_model::{EmployeeProfile, PayrollFigures, PeriodValue};

    fn record(payroll: PayrollFigures) -> ProcessedRecord {
        ProcessedRecord {
            id: "1-0".to_string(),
            row_index: 0,
            employee: EmployeeProfile::default(),
            payroll,
            period: PeriodValue::valid(2025, 7),
            is_valid: true,
            errors: Vec::new(),
        }
    }

    #[test]
    fn line_counts() {
        let slip = PayslipBreakdown::from_record(&record(PayrollFigures::default()));
        assert_eq!(slip.income.len(), 11);
        assert_eq!(slip.deductions.len(), 10);
        assert_eq!(slip.contributions.len(), 1);
        assert_eq!(slip.net_pay, 0.0);
    }

    #[test]
    fn spp_totals() {
        let slip = PayslipBreakdown::from_record(&record(PayrollFigures {
            base_salary: 1130.0,
            family_allowance: 113.0,
            gratification: 1130.0,
            bono_30334: 101.7,
            spp_contribution: 124.3,
            spp_insurance: 21.38,
            spp_commission: 1.87,
            spp_total: 147.55,
            income_tax: 10.0,
            essalud: 101.7,
            pension_regime: PensionRegime::Spp,
            ..PayrollFigures::default()
        }));
        assert_eq!(slip.total_income, 2474.7);
        assert_eq!(slip.total_deductions, 157.55);
        assert_eq!(slip.total_contributions, 101.7);
        assert_eq!(slip.net_pay, 2317.15);
    }

    #[test]
    fn snp_hides_spp_components() {
        let snp = record(PayrollFigures {
            base_salary: 1500.0,
            spp_contribution: 150.0,
            onp: 195.0,
            pension_regime: PensionRegime::Snp,
            ..PayrollFigures::default()
        });
        let slip = PayslipBreakdown::from_record(&snp);
        assert_eq!(snp.payroll.spp_contribution, 150.0);
        assert_eq!(slip.deductions[3].label, "SPP - APORTE OBLIGATORIA");
        assert_eq!(slip.deductions[3].amount, 0.0);
        assert_eq!(slip.deductions[6].amount, 195.0);
        assert_eq!(slip.net_pay, 1305.0);
    }
}
