//! Canonical odometer formatting and display re-punctuation.

use odoread_protocol::DecimalFormatMode;

/// Strip leading zeros from an integer part, keeping a lone `0`.
fn integer_digits(int_part: &str) -> &str {
    let trimmed = int_part.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Round an integer part and a long fraction to two decimal places, half up.
///
/// Works on the digit strings so integer parts of any length stay exact.
fn round_to_cents(int_digits: &str, fraction: &str) -> String {
    let round_up = fraction.as_bytes().get(2).is_some_and(|b| *b >= b'5');
    let mut digits: Vec<u8> = int_digits.bytes().chain(fraction.bytes().take(2)).collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_part, cents) = digits.split_at(digits.len() - 2);
    let int_part: String = int_part.iter().map(|b| char::from(*b)).collect();
    let cents: String = cents.iter().map(|b| char::from(*b)).collect();
    let cents = cents.trim_end_matches('0');
    if cents.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, cents)
    }
}

/// Render a validated numeric string in odometer display convention.
///
/// `numeric` holds digits and at most one `.`. The fractional part as
/// written decides the shape:
/// - absent or all zeros: integer, no point (`1500.0` → `1500`)
/// - one digit: exactly one decimal (`1500.8`)
/// - otherwise: up to two decimals with trailing zeros trimmed
pub fn format_canonical(numeric: &str) -> String {
    let (int_part, fraction) = match numeric.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction),
        None => (numeric, ""),
    };
    let int_digits = integer_digits(int_part);

    if fraction.bytes().all(|b| b == b'0') {
        return int_digits.to_string();
    }

    match fraction.len() {
        1 => format!("{}.{}", int_digits, fraction),
        2 => format!("{}.{}", int_digits, fraction.trim_end_matches('0')),
        // Longer fractions only come from comma input.
        _ => round_to_cents(int_digits, fraction),
    }
}

/// Strip leading zeros, collapsing an all-zero string to `"0"`.
///
/// A result that would start with a separator gets a `0` prefix.
pub fn collapse_leading_zeros(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let trimmed = s.trim_start_matches('0');
    match trimmed.chars().next() {
        None => "0".to_string(),
        Some('.') | Some(',') => format!("0{}", trimmed),
        Some(_) => trimmed.to_string(),
    }
}

/// Re-punctuate a digits-only reading for the given display mode.
///
/// Leading zeros are collapsed first. Input that still contains anything
/// other than digits is returned collapsed but otherwise untouched.
pub fn apply_mode(digits: &str, mode: DecimalFormatMode) -> String {
    let collapsed = collapse_leading_zeros(digits);

    let places = mode.fraction_digits();
    if places == 0 || collapsed.is_empty() || !collapsed.bytes().all(|b| b.is_ascii_digit()) {
        return collapsed;
    }

    if collapsed.len() > places {
        let (int_part, fraction) = collapsed.split_at(collapsed.len() - places);
        format!("{}.{}", int_part, fraction)
    } else {
        format!("0.{}{}", "0".repeat(places - collapsed.len()), collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_canonical("1500"), "1500");
        assert_eq!(format_canonical("001500"), "1500");
        assert_eq!(format_canonical("0000"), "0");
        assert_eq!(format_canonical("1500.0"), "1500");
        assert_eq!(format_canonical("1500."), "1500");
        assert_eq!(format_canonical("1500.00"), "1500");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_canonical("1500.8"), "1500.8");
        assert_eq!(format_canonical(".5"), "0.5");
        assert_eq!(format_canonical("007.5"), "7.5");
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_canonical("1234.56"), "1234.56");
        assert_eq!(format_canonical("1234.50"), "1234.5");
        assert_eq!(format_canonical("1234.05"), "1234.05");
    }

    #[test]
    fn test_format_rounds_long_fraction() {
        assert_eq!(format_canonical("1.234"), "1.23");
        assert_eq!(format_canonical("2.999"), "3");
        assert_eq!(format_canonical("10.5001"), "10.5");
    }

    #[test]
    fn test_integer_keeps_precision() {
        assert_eq!(format_canonical("98765432109876543210"), "98765432109876543210");
    }

    #[test]
    fn test_rounding_keeps_long_integer_part() {
        assert_eq!(format_canonical("12345678901234567.123"), "12345678901234567.12");
        assert_eq!(format_canonical("12345678901234567.995"), "12345678901234568");
        assert_eq!(format_canonical("99999999999999999.999"), "100000000000000000");
    }

    #[test]
    fn test_rounding_carries_into_integer() {
        assert_eq!(format_canonical("0.995"), "1");
        assert_eq!(format_canonical("9.996"), "10");
        assert_eq!(format_canonical("1.005"), "1.01");
        assert_eq!(format_canonical("0.001"), "0");
        assert_eq!(format_canonical("0.125"), "0.13");
    }

    #[test]
    fn test_collapse_leading_zeros() {
        assert_eq!(collapse_leading_zeros("0007"), "7");
        assert_eq!(collapse_leading_zeros("000"), "0");
        assert_eq!(collapse_leading_zeros("0.5"), "0.5");
        assert_eq!(collapse_leading_zeros("00,5"), "0,5");
        assert_eq!(collapse_leading_zeros(""), "");
    }

    #[test]
    fn test_apply_mode_none() {
        assert_eq!(apply_mode("0007", DecimalFormatMode::None), "7");
        assert_eq!(apply_mode("15008", DecimalFormatMode::None), "15008");
    }

    #[test]
    fn test_apply_mode_one_decimal() {
        assert_eq!(apply_mode("15008", DecimalFormatMode::OneDecimal), "1500.8");
        assert_eq!(apply_mode("7", DecimalFormatMode::OneDecimal), "0.7");
        assert_eq!(apply_mode("00", DecimalFormatMode::OneDecimal), "0.0");
        assert_eq!(apply_mode("0158", DecimalFormatMode::OneDecimal), "15.8");
    }

    #[test]
    fn test_apply_mode_two_decimal() {
        assert_eq!(apply_mode("5", DecimalFormatMode::TwoDecimal), "0.05");
        assert_eq!(apply_mode("42", DecimalFormatMode::TwoDecimal), "0.42");
        assert_eq!(apply_mode("123456", DecimalFormatMode::TwoDecimal), "1234.56");
        assert_eq!(apply_mode("000", DecimalFormatMode::TwoDecimal), "0.00");
    }

    #[test]
    fn test_apply_mode_leaves_punctuated_input() {
        assert_eq!(apply_mode("0.5", DecimalFormatMode::OneDecimal), "0.5");
        assert_eq!(apply_mode("", DecimalFormatMode::TwoDecimal), "");
    }
}
