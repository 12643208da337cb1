//! Character filtering and decimal-separator reconciliation.

/// Keep ASCII digits and the two separator glyphs, drop everything else.
pub fn filter_numeric(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

/// Resolve `,` / `.` ambiguity between European and US style readings.
///
/// Input must already be filtered to digits, `.` and `,`.
pub fn reconcile_separators(s: &str) -> String {
    if s.contains(',') {
        // Comma is the decimal mark, dots group thousands.
        return s
            .chars()
            .filter(|c| *c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
    }

    match s.matches('.').count() {
        0 => s.to_string(),
        1 => {
            // A single dot is a decimal point only with exactly one tenths digit.
            let (_, fraction) = s.split_once('.').unwrap_or((s, ""));
            if fraction.len() == 1 {
                s.to_string()
            } else {
                s.replace('.', "")
            }
        }
        _ => s.replace('.', ""),
    }
}
