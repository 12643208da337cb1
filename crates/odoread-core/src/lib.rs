//! Odometer OCR reading normalization and crop geometry.
//!
//! The core is two pure functions: [`normalize`] turns a raw OCR line into a
//! canonical odometer reading, and [`compute_crop_rect`] picks the region of
//! a captured frame to send to OCR. The rest of the crate wires them to an
//! image codec and an OCR engine.

pub mod config;
pub mod display;
pub mod geometry;
pub mod imaging;
pub mod normalize;
pub mod ocr;
pub mod reader;

pub use config::{ConfigError, PreprocessConfig, ReaderConfig};
pub use display::{join_lines, redisplay, split_lines};
pub use geometry::{compute_crop_rect, DEFAULT_SCALE_ADJUSTMENT};
pub use imaging::{crop_frame, crop_image, image_dimensions, preprocess, CroppedFrame, ImagingError};
pub use normalize::{apply_mode, normalize, GlyphMap, ReadingNormalizer};
pub use ocr::{find_models_dir, OcrService, TextRecognizer};
pub use reader::{OdometerReader, ReadError, Reading};
