//! Edit-view redisplay of recognized text.
//!
//! The result view shows every OCR line. Toggling the decimal mode only
//! re-punctuates the last line, and only when it is a plain number.

use odoread_protocol::DecimalFormatMode;

use crate::normalize::apply_mode;

/// Split edited text into lines, accepting `\n` and `\r\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Digits of a line once its separators are removed, if that is all it holds.
fn separator_free_digits(line: &str) -> Option<String> {
    let digits: String = line
        .trim()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

/// Re-punctuate the last line for `mode`, leaving other lines untouched.
///
/// Separators already on the line are dropped first when inserting a point.
/// Switching back to [`DecimalFormatMode::None`] only removes a point; a line
/// without one is kept as written.
pub fn redisplay(lines: &[String], mode: DecimalFormatMode) -> Vec<String> {
    let mut out = lines.to_vec();
    if let Some(last) = out.last_mut() {
        if mode == DecimalFormatMode::None {
            if let Some(digits) = point_free_digits(last) {
                *last = digits;
            }
        } else if let Some(digits) = separator_free_digits(last) {
            *last = apply_mode(&digits, mode);
        }
    }
    out
}

/// Digits of a punctuated line once its `.` is removed.
fn point_free_digits(line: &str) -> Option<String> {
    let line = line.trim();
    if !line.contains('.') {
        return None;
    }
    let digits: String = line.chars().filter(|c| *c != '.').collect();
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
