//! Odometer reading normalizer.
//!
//! Turns one raw OCR line into a canonical numeric reading. The pipeline is
//! glyph substitution → character filter → separator reconciliation →
//! numeric validation → canonical formatting. Every stage is total: a line
//! that cannot be recovered comes out as an empty string.

mod format;
mod glyphs;
mod separators;

use std::sync::OnceLock;

use odoread_protocol::DecimalFormatMode;
use tracing::trace;

pub use format::{apply_mode, collapse_leading_zeros, format_canonical};
pub use glyphs::GlyphMap;
pub use separators::{filter_numeric, reconcile_separators};

/// Normalizer with the default glyph table, shared by [`normalize`].
static DEFAULT_NORMALIZER: OnceLock<ReadingNormalizer> = OnceLock::new();

/// Normalize a raw OCR line with the default glyph table.
pub fn normalize(raw: &str, mode: DecimalFormatMode) -> String {
    DEFAULT_NORMALIZER
        .get_or_init(ReadingNormalizer::default)
        .normalize(raw, mode)
}

/// Reading normalizer owning an immutable glyph table.
#[derive(Debug, Clone, Default)]
pub struct ReadingNormalizer {
    glyphs: GlyphMap,
}

impl ReadingNormalizer {
    /// Create a normalizer with a custom glyph table.
    pub fn new(glyphs: GlyphMap) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &GlyphMap {
        &self.glyphs
    }

    /// Clean a raw line into its canonical reading, or empty if unrecoverable.
    pub fn clean(&self, raw: &str) -> String {
        let substituted = self.glyphs.substitute(raw);
        let filtered = filter_numeric(&substituted);
        let numeric = reconcile_separators(&filtered);

        // Formatting works on the digits; the parse only rejects non-numbers.
        // Digit runs too long for an f64 parse to infinity and are still kept.
        if numeric.parse::<f64>().is_err() {
            trace!("Discarding OCR line {:?} (filtered to {:?})", raw, numeric);
            return String::new();
        }

        format_canonical(&numeric)
    }

    /// Clean a raw line and re-punctuate it for the display mode.
    ///
    /// With [`DecimalFormatMode::None`] this is [`clean`](Self::clean). Other
    /// modes only touch readings that came out without a decimal point.
    pub fn normalize(&self, raw: &str, mode: DecimalFormatMode) -> String {
        let cleaned = self.clean(raw);
        if mode == DecimalFormatMode::None || cleaned.is_empty() || cleaned.contains('.') {
            return cleaned;
        }
        apply_mode(&cleaned, mode)
    }

    /// Normalize a batch of lines, dropping the ones that were discarded.
    pub fn normalize_lines<'a, I>(&self, lines: I, mode: DecimalFormatMode) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(|line| self.normalize(line, mode))
            .filter(|reading| !reading.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NONE: DecimalFormatMode = DecimalFormatMode::None;

    #[test]
    fn test_glyphs_become_digits() {
        assert_eq!(normalize("O15OO", NONE), "1500");
        assert_eq!(normalize("I2§4", NONE), "1254");
        assert_eq!(normalize("Bg°", NONE), "890");
    }

    #[test]
    fn test_european_separators() {
        assert_eq!(normalize("1.500,5", NONE), "1500.5");
        assert_eq!(normalize("12.345,67 km", NONE), "12345.67");
    }

    #[test]
    fn test_thousands_dots() {
        assert_eq!(normalize("12.34.56", NONE), "123456");
        assert_eq!(normalize("1.500", NONE), "1500");
    }

    #[test]
    fn test_single_dot_tenths() {
        assert_eq!(normalize("1500.8", NONE), "1500.8");
        assert_eq!(normalize("1500.0", NONE), "1500");
        assert_eq!(normalize("1234.56", NONE), "123456");
    }

    #[test]
    fn test_two_decimal_reading_loses_point_when_renormalized() {
        // A single dot only survives with one fractional digit, so a
        // two-decimal reading (reachable from comma input) is not a fixed point.
        let once = normalize("1234,56", NONE);
        assert_eq!(once, "1234.56");
        assert_eq!(normalize(&once, NONE), "123456");
    }

    #[test]
    fn test_long_comma_fraction_keeps_integer_digits() {
        assert_eq!(normalize("12345678901234567,123", NONE), "12345678901234567.12");
    }

    #[test]
    fn test_digit_run_beyond_f64_range_is_kept() {
        let digits = "9".repeat(400);
        assert_eq!(normalize(&digits, NONE), digits);
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(normalize("0001500", NONE), "1500");
        assert_eq!(normalize("000", NONE), "0");
    }

    #[test]
    fn test_substitution_runs_before_filter() {
        // 'S' and 'o' would be stripped if the filter ran first.
        assert_eq!(normalize("1S0o", NONE), "1500");
    }

    #[test]
    fn test_unrecoverable_lines_are_empty() {
        assert_eq!(normalize("", NONE), "");
        assert_eq!(normalize("km/h", NONE), "");
        assert_eq!(normalize(".,", NONE), "");
        assert_eq!(normalize("...", NONE), "");
        assert_eq!(normalize("1,2,3", NONE), "");
    }

    #[test]
    fn test_mode_applies_to_integer_readings() {
        assert_eq!(normalize("15008", DecimalFormatMode::OneDecimal), "1500.8");
        assert_eq!(normalize("123456", DecimalFormatMode::TwoDecimal), "1234.56");
        // Readings that already carry a point are left alone.
        assert_eq!(normalize("1500.8", DecimalFormatMode::TwoDecimal), "1500.8");
        assert_eq!(normalize("abc", DecimalFormatMode::OneDecimal), "");
    }

    #[test]
    fn test_custom_glyph_table() {
        let normalizer = ReadingNormalizer::new(GlyphMap::default().with('l', '1'));
        assert_eq!(normalizer.clean("l5OO"), "1500");
        assert_eq!(ReadingNormalizer::new(GlyphMap::empty()).clean("O15OO"), "15");
    }

    #[test]
    fn test_normalize_lines_drops_discarded() {
        let normalizer = ReadingNormalizer::default();
        let readings = normalizer.normalize_lines(["km/h", "O15OO", "---"], NONE);
        assert_eq!(readings, vec!["1500".to_string()]);
    }

    fn canonical_reading() -> impl Strategy<Value = String> {
        (0u64..10_000_000, proptest::option::of(0u8..10)).prop_map(|(int, tenths)| match tenths {
            Some(d) if d != 0 => format!("{}.{}", int, d),
            _ => int.to_string(),
        })
    }

    proptest! {
        #[test]
        fn prop_digit_free_input_is_empty(raw in "[ac-fhj-npru-zACE-HJ-NPRU-Y ,.:/\\-]{0,32}") {
            // Alphabet excludes every glyph the default table maps to a digit.
            prop_assert_eq!(normalize(&raw, NONE), "");
        }

        #[test]
        fn prop_canonical_readings_are_fixed_points(reading in canonical_reading()) {
            let once = normalize(&reading, NONE);
            prop_assert_eq!(&once, &reading);
            prop_assert_eq!(normalize(&once, NONE), once);
        }

        #[test]
        fn prop_output_matches_grammar(raw in "\\PC{0,24}") {
            let out = normalize(&raw, NONE);
            if !out.is_empty() {
                let (int_part, fraction) = out.split_once('.').unwrap_or((out.as_str(), ""));
                prop_assert!(int_part.chars().all(|c| c.is_ascii_digit()));
                prop_assert!(!int_part.is_empty());
                prop_assert!(int_part == "0" || !int_part.starts_with('0'));
                prop_assert!(fraction.len() <= 2);
                prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn prop_normalize_is_deterministic(raw in "\\PC{0,24}") {
            prop_assert_eq!(normalize(&raw, NONE), normalize(&raw, NONE));
        }
    }
}
