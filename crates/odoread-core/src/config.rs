//! Reader configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Files are JSON.

use std::path::Path;

use odoread_protocol::DecimalFormatMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::DEFAULT_SCALE_ADJUSTMENT;

/// Errors from loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scale_adjustment must be in (0, 1], got {0}")]
    ScaleAdjustment(f64),

    #[error("jpeg_quality must be in 1..=100, got {0}")]
    JpegQuality(u8),

    #[error("preprocess.blur_sigma must be finite and >= 0, got {0}")]
    BlurSigma(f32),

    #[error("preprocess.contrast must be finite, got {0}")]
    Contrast(f32),
}

/// Image preprocessing applied before cropping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Run grayscale + contrast + blur before cropping.
    pub enabled: bool,
    /// Contrast adjustment passed to the image codec (percent, may be negative).
    pub contrast: f32,
    /// Gaussian blur sigma; 0 disables the blur.
    pub blur_sigma: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            contrast: 30.0,
            blur_sigma: 1.0,
        }
    }
}

/// Configuration for the capture pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    /// Shrink factor for the crop rectangle, in (0, 1].
    pub scale_adjustment: f64,
    /// Display mode applied to integer readings.
    pub decimal_mode: DecimalFormatMode,
    /// JPEG quality of the cropped frame sent to OCR.
    pub jpeg_quality: u8,
    pub preprocess: PreprocessConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            scale_adjustment: DEFAULT_SCALE_ADJUSTMENT,
            decimal_mode: DecimalFormatMode::None,
            jpeg_quality: 90,
            preprocess: PreprocessConfig::default(),
        }
    }
}

impl ReaderConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ReaderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Replace the scale adjustment when an override is given, then validate.
    pub fn with_scale_override(mut self, scale: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(scale) = scale {
            self.scale_adjustment = scale;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_adjustment > 0.0 && self.scale_adjustment <= 1.0) {
            return Err(ConfigError::ScaleAdjustment(self.scale_adjustment));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::JpegQuality(self.jpeg_quality));
        }
        if !self.preprocess.blur_sigma.is_finite() || self.preprocess.blur_sigma < 0.0 {
            return Err(ConfigError::BlurSigma(self.preprocess.blur_sigma));
        }
        if !self.preprocess.contrast.is_finite() {
            return Err(ConfigError::Contrast(self.preprocess.contrast));
        }
        Ok(())
    }
}
