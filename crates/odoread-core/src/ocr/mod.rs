//! OCR collaborator.
//!
//! The pipeline only depends on [`TextRecognizer`]. [`OcrService`] backs it
//! with the ocrs library.

mod engine;

use odoread_protocol::RecognizedText;

pub use engine::{find_models_dir, OcrService, DETECTION_MODEL, RECOGNITION_MODEL};

/// Anything that turns encoded image bytes into text lines.
pub trait TextRecognizer: Send + Sync {
    /// Recognize text lines in a PNG or JPEG image.
    fn recognize(&self, image: &[u8]) -> anyhow::Result<RecognizedText>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<RecognizedText> {
        (**self).recognize(image)
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for Box<T> {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<RecognizedText> {
        (**self).recognize(image)
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for std::sync::Arc<T> {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<RecognizedText> {
        (**self).recognize(image)
    }
}
