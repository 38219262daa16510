//! Header text folding.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a header or variant for comparison: strips accents, uppercases,
/// trims and collapses inner whitespace.
///
/// `"  Cargo u Ocupación "` and `"CARGO U OCUPACION"` fold to the same text.
pub fn fold_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_header("Remuneración o Jornal Básico"), "REMUNERACION O JORNAL BASICO");
        assert_eq!(fold_header("Días Vac."), "DIAS VAC.");
        assert_eq!(fold_header("AÑO"), "ANO");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(fold_header("  APELLIDOS   Y\tNOMBRES "), "APELLIDOS Y NOMBRES");
        assert_eq!(fold_header("   "), "");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(fold_header("\u{feff}DNI"), "DNI");
    }
}
