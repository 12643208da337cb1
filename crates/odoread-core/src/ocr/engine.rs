//! OCR engine wrapper using the ocrs library.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use odoread_protocol::RecognizedText;
use rten::Model;
use tracing::{debug, trace};

use super::TextRecognizer;

/// File name of the text detection model.
pub const DETECTION_MODEL: &str = "text-detection.rten";
/// File name of the text recognition model.
pub const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// OCR service for text detection and recognition.
pub struct OcrService {
    engine: OcrEngine,
}

impl OcrService {
    /// Create a new OCR service by loading models from the given directory.
    pub fn new(models_dir: &Path) -> Result<Self> {
        let detection_path = models_dir.join(DETECTION_MODEL);
        let recognition_path = models_dir.join(RECOGNITION_MODEL);

        debug!("Loading OCR detection model from {:?}", detection_path);
        let detection_model = Model::load_file(&detection_path)
            .with_context(|| format!("Failed to load detection model from {:?}", detection_path))?;

        debug!("Loading OCR recognition model from {:?}", recognition_path);
        let recognition_model = Model::load_file(&recognition_path).with_context(|| {
            format!("Failed to load recognition model from {:?}", recognition_path)
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .context("Failed to create OCR engine")?;

        debug!("OCR engine initialized successfully");
        Ok(Self { engine })
    }

    /// Recognize all text lines in an image, top to bottom.
    pub fn read_lines(&self, image_data: &[u8]) -> Result<Vec<String>> {
        let img = image::load_from_memory(image_data)
            .context("Failed to decode image")?
            .into_rgb8();

        let (width, height) = (img.width(), img.height());
        trace!("Image loaded: {}x{}", width, height);

        let img_source = ImageSource::from_bytes(img.as_raw(), (width, height))
            .context("Failed to create image source")?;

        let ocr_input = self
            .engine
            .prepare_input(img_source)
            .context("Failed to prepare OCR input")?;

        let word_rects = self
            .engine
            .detect_words(&ocr_input)
            .context("Failed to detect words")?;
        trace!("Detected {} word regions", word_rects.len());

        let line_rects = self.engine.find_text_lines(&ocr_input, &word_rects);

        let line_texts = self
            .engine
            .recognize_text(&ocr_input, &line_rects)
            .context("Failed to recognize text")?;

        let lines: Vec<String> = line_texts
            .iter()
            .flatten()
            .map(|line| line.to_string())
            .filter(|text| !text.trim().is_empty())
            .collect();

        debug!("Recognized {} text lines", lines.len());
        Ok(lines)
    }
}

impl TextRecognizer for OcrService {
    fn recognize(&self, image: &[u8]) -> Result<RecognizedText> {
        let lines = self.read_lines(image)?;
        Ok(RecognizedText {
            success: !lines.is_empty(),
            lines,
        })
    }
}

/// Whether both model files are present in `dir`.
fn has_models(dir: &Path) -> bool {
    dir.join(DETECTION_MODEL).exists() && dir.join(RECOGNITION_MODEL).exists()
}

/// Find the models directory relative to the executable.
///
/// Models live at `bin/../models`, or in `models/` next to the executable.
pub fn find_models_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("Failed to get executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Failed to compute executable directory")?;

    let candidates = [
        exe_dir.parent().map(|root| root.join("models")),
        Some(exe_dir.join("models")),
    ];

    for dir in candidates.into_iter().flatten() {
        if has_models(&dir) {
            debug!("Found models directory at {:?}", dir);
            return Ok(dir);
        }
    }

    anyhow::bail!(
        "Could not find OCR models ({} and {}) near {:?}. Pass --models <DIR>.",
        DETECTION_MODEL,
        RECOGNITION_MODEL,
        exe_dir
    )
}
