//! Delimiter detection.
//!
//! Spreadsheet exports from Spanish-locale Excel use `;` because `,` is the
//! decimal separator there, so the delimiter cannot be assumed.

/// Delimiters considered, in tie-break order.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Picks the delimiter that occurs most often, outside double quotes, on the
/// first non-blank line. Ties go to the earlier candidate; no occurrence at
/// all gives `,`.
pub fn sniff_delimiter(text: &str) -> u8 {
    let Some(line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };

    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(slot) = CANDIDATE_DELIMITERS.iter().position(|d| *d == byte) {
            counts[slot] += 1;
        }
    }

    let mut best = 0;
    for (slot, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = slot;
        }
    }
    CANDIDATE_DELIMITERS[best]
}
