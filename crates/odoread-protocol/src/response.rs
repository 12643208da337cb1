//! JSON response envelope printed by the CLI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CropRect, DecimalFormatMode, Orientation, ReadingLine};

/// A command result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Response data on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,

    /// Error details on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl Response {
    /// Create a successful response with data.
    pub fn success(data: ResponseData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorInfo {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Response data variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseData {
    /// Normalized OCR lines.
    Readings {
        /// Decimal mode applied.
        mode: DecimalFormatMode,
        /// Each input line with its cleaned reading.
        lines: Vec<ReadingLine>,
    },

    /// A single re-punctuated value.
    Formatted {
        mode: DecimalFormatMode,
        value: String,
    },

    /// Edit-view text after redisplay.
    Lines {
        lines: Vec<String>,
    },

    /// Computed crop rectangle.
    Geometry {
        orientation: Orientation,
        rect: CropRect,
    },

    /// Cropped frame.
    Cropped {
        rect: CropRect,
        /// Output path, when written to disk.
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        /// Base64-encoded JPEG, when requested.
        #[serde(skip_serializing_if = "Option::is_none")]
        base64: Option<String>,
    },

    /// Full capture pipeline result.
    Reading {
        /// Crop applied before OCR, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        crop: Option<CropRect>,
        /// Raw OCR lines.
        raw_lines: Vec<String>,
        /// Readings that survived normalization.
        readings: Vec<String>,
    },
}

/// Error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
}

/// Error codes for structured error handling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Error)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Invalid command arguments.
    #[error("invalid request")]
    InvalidRequest,

    /// Configuration file missing or invalid.
    #[error("invalid config")]
    InvalidConfig,

    /// Image could not be decoded or encoded.
    #[error("image error")]
    ImageError,

    /// Crop rectangle has zero area.
    #[error("empty region")]
    EmptyRegion,

    /// OCR engine unavailable or failed.
    #[error("ocr error")]
    OcrError,

    /// OCR ran but recognized nothing.
    #[error("nothing recognized")]
    NothingRecognized,

    /// OCR did not finish in time.
    #[error("timeout")]
    Timeout,

    /// Internal error.
    #[error("internal error")]
    InternalError,
}
