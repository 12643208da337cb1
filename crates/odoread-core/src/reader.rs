//! Capture pipeline: preprocess → crop → OCR → normalize.

use odoread_protocol::{CropRect, ViewportDimensions};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ReaderConfig;
use crate::imaging::{self, ImagingError};
use crate::normalize::ReadingNormalizer;
use crate::ocr::TextRecognizer;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("OCR failed: {0:#}")]
    Ocr(anyhow::Error),

    #[error("No text recognized in frame")]
    NothingRecognized,
}

/// Outcome of reading one captured frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Region sent to OCR, or `None` when the whole frame was used.
    pub crop: Option<CropRect>,
    /// Lines as the OCR engine returned them.
    pub raw_lines: Vec<String>,
    /// Canonical readings, discarded lines removed.
    pub readings: Vec<String>,
}

/// Reads odometer values from captured frames.
pub struct OdometerReader<R> {
    recognizer: R,
    normalizer: ReadingNormalizer,
    config: ReaderConfig,
}

impl<R: TextRecognizer> OdometerReader<R> {
    /// Create a reader with the default glyph table.
    pub fn new(recognizer: R, config: ReaderConfig) -> Self {
        Self::with_normalizer(recognizer, ReadingNormalizer::default(), config)
    }

    pub fn with_normalizer(recognizer: R, normalizer: ReadingNormalizer, config: ReaderConfig) -> Self {
        Self {
            recognizer,
            normalizer,
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &ReadingNormalizer {
        &self.normalizer
    }

    /// Crop a frame to its region of interest, falling back to the whole frame.
    ///
    /// Returns the bytes to send to OCR and the crop applied, if any.
    pub fn prepare_frame(&self, frame: &[u8], viewport: ViewportDimensions) -> (Vec<u8>, Option<CropRect>) {
        let source = if self.config.preprocess.enabled {
            imaging::preprocess(frame, &self.config.preprocess)
        } else {
            frame.to_vec()
        };

        match imaging::crop_frame(
            &source,
            viewport,
            self.config.scale_adjustment,
            self.config.jpeg_quality,
        ) {
            Ok(cropped) => (cropped.jpeg, Some(cropped.rect)),
            Err(ImagingError::EmptyRegion(rect)) => {
                debug!("Crop region {:?} is empty, using the whole frame", rect);
                (source, None)
            }
            Err(e) => {
                warn!("Could not crop frame, using the whole frame: {}", e);
                (source, None)
            }
        }
    }

    /// Read one captured frame.
    pub fn read(&self, frame: &[u8], viewport: ViewportDimensions) -> Result<Reading, ReadError> {
        let (image, crop) = self.prepare_frame(frame, viewport);
        let recognized = self.recognizer.recognize(&image).map_err(ReadError::Ocr)?;
        if !recognized.success {
            return Err(ReadError::NothingRecognized);
        }
        Ok(self.finish(crop, recognized.lines))
    }

    /// Normalize OCR lines into a [`Reading`].
    pub fn finish(&self, crop: Option<CropRect>, raw_lines: Vec<String>) -> Reading {
        let readings = self.normalizer.normalize_lines(
            raw_lines.iter().map(String::as_str),
            self.config.decimal_mode,
        );
        info!(
            "Recognized {} lines, {} readings",
            raw_lines.len(),
            readings.len()
        );
        Reading {
            crop,
            raw_lines,
            readings,
        }
    }
}
