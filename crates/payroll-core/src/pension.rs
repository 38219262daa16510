//! Pension regime classification.

use payroll_model::PensionRegime;

/// AFP brand names that identify a private-fund affiliate.
pub const AFP_BRANDS: [&str; 4] = ["INTEGRA", "PRIMA", "PROFUTURO", "HABITAT"];

/// Decides whether an employee contributes to the SNP or an AFP.
///
/// Checked in order: an `ONP` mention or a positive ONP amount means SNP;
/// a positive SPP total or a known AFP brand means SPP; anything else is SNP.
pub fn classify_regime(pension_name: &str, onp: f64, spp_total: f64) -> PensionRegime {
    let name = pension_name.to_uppercase();
    if name.contains("ONP") || onp > 0.0 {
        return PensionRegime::Snp;
    }
    if spp_total > 0.0 || AFP_BRANDS.iter().any(|brand| name.contains(brand)) {
        return PensionRegime::Spp;
    }
    PensionRegime::Snp
}
