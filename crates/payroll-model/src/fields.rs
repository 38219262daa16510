//! Canonical payroll fields and the header variants that identify them.
//!
//! The declaration order of [`CanonicalField`] is significant: the column
//! resolver walks fields in this order and the first binding wins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed key of the internal payroll data model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    // === Identity ===
    FullName,
    Dni,
    JobTitle,
    Area,
    HireDate,
    TerminationDate,
    BirthDate,
    Period,

    // === Income ===
    BaseSalary,
    MonthlyRemuneration,
    VacationRemuneration,
    FamilyAllowance,
    Bonus,
    #[serde(rename = "gratificacion")]
    Gratification,
    Bono30334,
    OtherIncome,

    // === Overtime ===
    OvertimeHours,
    Overtime25,
    Overtime35,
    Overtime100,
    Overtime,

    // === Deductions ===
    Afp,
    SppAporte,
    SppPrima,
    SppComision,
    Onp,
    IncomeTax,
    OtherDeductions,
    #[serde(rename = "tardanzas")]
    Lateness,
    #[serde(rename = "adelantos")]
    Advances,

    // === Employer contributions ===
    Essalud,

    // === Attendance ===
    DaysWorked,
    VacationDays,
    AbsenceDays,
}

/// Fields that must resolve for a file to be processable at all.
pub const REQUIRED_FIELDS: [CanonicalField; 2] = [CanonicalField::FullName, CanonicalField::Dni];

impl CanonicalField {
    /// Every field, in resolution order.
    pub const ALL: [CanonicalField; 34] = [
        Self::FullName,
        Self::Dni,
        Self::JobTitle,
        Self::Area,
        Self::HireDate,
        Self::TerminationDate,
        Self::BirthDate,
        Self::Period,
        Self::BaseSalary,
        Self::MonthlyRemuneration,
        Self::VacationRemuneration,
        Self::FamilyAllowance,
        Self::Bonus,
        Self::Gratification,
        Self::Bono30334,
        Self::OtherIncome,
        Self::OvertimeHours,
        Self::Overtime25,
        Self::Overtime35,
        Self::Overtime100,
        Self::Overtime,
        Self::Afp,
        Self::SppAporte,
        Self::SppPrima,
        Self::SppComision,
        Self::Onp,
        Self::IncomeTax,
        Self::OtherDeductions,
        Self::Lateness,
        Self::Advances,
        Self::Essalud,
        Self::DaysWorked,
        Self::VacationDays,
        Self::AbsenceDays,
    ];

    /// Stable camelCase key used in serialized column maps.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Dni => "dni",
            Self::JobTitle => "jobTitle",
            Self::Area => "area",
            Self::HireDate => "hireDate",
            Self::TerminationDate => "terminationDate",
            Self::BirthDate => "birthDate",
            Self::Period => "period",
            Self::BaseSalary => "baseSalary",
            Self::MonthlyRemuneration => "monthlyRemuneration",
            Self::VacationRemuneration => "vacationRemuneration",
            Self::FamilyAllowance => "familyAllowance",
            Self::Bonus => "bonus",
            Self::Gratification => "gratificacion",
            Self::Bono30334 => "bono30334",
            Self::OtherIncome => "otherIncome",
            Self::OvertimeHours => "overtimeHours",
            Self::Overtime25 => "overtime25",
            Self::Overtime35 => "overtime35",
            Self::Overtime100 => "overtime100",
            Self::Overtime => "overtime",
            Self::Afp => "afp",
            Self::SppAporte => "sppAporte",
            Self::SppPrima => "sppPrima",
            Self::SppComision => "sppComision",
            Self::Onp => "onp",
            Self::IncomeTax => "incomeTax",
            Self::OtherDeductions => "otherDeductions",
            Self::Lateness => "tardanzas",
            Self::Advances => "adelantos",
            Self::Essalud => "essalud",
            Self::DaysWorked => "daysWorked",
            Self::VacationDays => "vacationDays",
            Self::AbsenceDays => "absenceDays",
        }
    }

    /// Accepted spreadsheet header spellings, in match priority order.
    ///
    /// Accents and letter case are folded before comparison, so each entry
    /// only needs to be listed once.
    #[must_use]
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            Self::FullName => &["APELLIDOS Y NOMBRES", "NOMBRES Y APELLIDOS", "TRABAJADOR"],
            Self::Dni => &["DNI", "DOCUMENTO"],
            Self::JobTitle => &["CARGO U OCUPACIÓN", "CARGO", "OCUPACION"],
            Self::Area => &["AREA DE TRABAJO", "AREA", "DEPARTAMENTO"],
            Self::HireDate => &["FECHA DE INGRESO", "F. INGRESO"],
            Self::TerminationDate => &["FECHA DE CESE", "F. CESE"],
            Self::BirthDate => &["FECHA DE NACIMIENTO", "F. NACIMIENTO"],
            Self::Period => &["PERIODO DE CÁLCULO", "PERIODO", "MES"],
            Self::BaseSalary => &["REMUNERACIÓN O JORNAL BÁSICO", "BASICO"],
            Self::MonthlyRemuneration => &["REM.MENSUAL"],
            Self::VacationRemuneration => &["REMUNERACIÓN VACACIONAL", "VACACIONES PAGADAS"],
            Self::FamilyAllowance => &["ASIGNACIÓN FAMILIAR", "ASIG. FAM."],
            Self::Bonus => &["Bonos", "BONIFICACIONES"],
            Self::Gratification => &["GRATIFICACIÓN", "GRATIFICACION"],
            Self::Bono30334 => &["BONO TEMPORAL LEY 30334", "BONO 30334"],
            Self::OtherIncome => &["OTROS INGRESOS"],
            Self::OvertimeHours => &["Horas Extras", "H.Ext.", "Hrs. Extra"],
            Self::Overtime25 => &["HORAS EXTRAS 25%", "H.E. 25%"],
            Self::Overtime35 => &["HORAS EXTRAS 35%", "H.E. 35%"],
            Self::Overtime100 => &["HORAS EXTRAS 100%", "H.E. 100%"],
            Self::Overtime => &["HORAS EXTRAS"],
            Self::Afp => &["AFP", "SISTEMA PENSIONARIO"],
            Self::SppAporte => &["SPP - APORTE OBLIGATORIA", "AFP APORTE"],
            Self::SppPrima => &["SPP - PRIMA SEGURO", "AFP PRIMA"],
            Self::SppComision => &["SPP - COMISION PORCENTUAL", "AFP COMISION"],
            Self::Onp => &["SISTEMA NACIONAL DE PENSIONES ONP", "ONP"],
            Self::IncomeTax => &["RENTA DE QUINTA CATEGORIA", "RENTA 5TA"],
            Self::OtherDeductions => &["OTROS DESCUENTOS"],
            Self::Lateness => &["TARDANZAS", "DSCTO TARDANZA"],
            Self::Advances => &["ADELANTOS OTORGADOS", "ADELANTOS"],
            Self::Essalud => &["ESSALUD SEGURO REGULAR", "ESSALUD"],
            Self::DaysWorked => &[
                "DIAS LABORADOS",
                "DIAS LABORADOS:",
                "Dias Lab.",
                "Dias Laborados",
            ],
            Self::VacationDays => &["DIAS DE VACACIONES", "DIAS DE VACACIONES:", "Días Vac."],
            Self::AbsenceDays => &["DIAS DE FALTAS", "Días de Falta", "Permisos y Faltas"],
        }
    }

    /// True for fields whose absence aborts the whole batch.
    #[must_use]
    pub fn is_required(self) -> bool {
        REQUIRED_FIELDS.contains(&self)
    }

    /// True for the July/December-only figures.
    #[must_use]
    pub fn is_seasonal(self) -> bool {
        matches!(self, Self::Gratification | Self::Bono30334 | Self::Advances)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
