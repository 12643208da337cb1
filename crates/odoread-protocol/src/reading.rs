//! Reading and recognition types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a digits-only reading is re-punctuated for display.
///
/// Owned by the display layer and passed explicitly to every formatting call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalFormatMode {
    /// Leave the digits as they are.
    #[default]
    None,
    /// Last digit is the tenths digit.
    OneDecimal,
    /// Last two digits are the fractional part.
    TwoDecimal,
}

impl DecimalFormatMode {
    /// Numeric code used by the display layer (0, 1 or 2).
    pub fn code(self) -> u8 {
        match self {
            DecimalFormatMode::None => 0,
            DecimalFormatMode::OneDecimal => 1,
            DecimalFormatMode::TwoDecimal => 2,
        }
    }

    /// Number of fractional digits this mode inserts.
    pub fn fraction_digits(self) -> usize {
        usize::from(self.code())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecimalFormatMode::None => "none",
            DecimalFormatMode::OneDecimal => "one-decimal",
            DecimalFormatMode::TwoDecimal => "two-decimal",
        }
    }
}

impl fmt::Display for DecimalFormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown decimal format mode name or code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown decimal format mode '{0}' (expected none, one-decimal, two-decimal or 0-2)")]
pub struct ParseModeError(pub String);

impl TryFrom<u8> for DecimalFormatMode {
    type Error = ParseModeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DecimalFormatMode::None),
            1 => Ok(DecimalFormatMode::OneDecimal),
            2 => Ok(DecimalFormatMode::TwoDecimal),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

impl FromStr for DecimalFormatMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "0" => Ok(DecimalFormatMode::None),
            "one-decimal" | "one" | "1" => Ok(DecimalFormatMode::OneDecimal),
            "two-decimal" | "two" | "2" => Ok(DecimalFormatMode::TwoDecimal),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Result of running an OCR engine over an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecognizedText {
    /// Whether the engine recognized anything usable.
    pub success: bool,
    /// Recognized lines, top to bottom.
    pub lines: Vec<String>,
}

impl RecognizedText {
    /// A successful recognition with the given lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: true,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// A failed recognition.
    pub fn failed() -> Self {
        Self::default()
    }
}

/// One OCR line paired with its cleaned reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadingLine {
    /// Line as the OCR engine produced it.
    pub raw: String,
    /// Canonical reading, empty when the line was discarded.
    pub cleaned: String,
}
