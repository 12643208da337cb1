//! Image codec operations around OCR: decode, crop, encode, preprocess.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use odoread_protocol::{CropRect, ViewportDimensions};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::PreprocessConfig;
use crate::geometry::compute_crop_rect;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Crop region {0:?} has zero area")]
    EmptyRegion(CropRect),
}

/// A frame cropped to its region of interest.
#[derive(Debug, Clone)]
pub struct CroppedFrame {
    /// Region of the original frame that was kept.
    pub rect: CropRect,
    /// JPEG-encoded cropped image.
    pub jpeg: Vec<u8>,
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory(bytes).map_err(ImagingError::Decode)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImagingError> {
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder).map_err(ImagingError::Encode)?;
    Ok(buffer)
}

fn crop_decoded(
    img: &DynamicImage,
    rect: &CropRect,
    quality: u8,
) -> Result<Vec<u8>, ImagingError> {
    if rect.is_empty() {
        return Err(ImagingError::EmptyRegion(*rect));
    }
    let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);
    trace!("Cropped to {}x{}", cropped.width(), cropped.height());
    encode_jpeg(&cropped, quality)
}

/// Pixel dimensions of an encoded image.
pub fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), ImagingError> {
    let img = decode(bytes)?;
    Ok((img.width(), img.height()))
}

/// Crop an encoded image to `rect` and re-encode it as JPEG.
pub fn crop_image(bytes: &[u8], rect: &CropRect, quality: u8) -> Result<Vec<u8>, ImagingError> {
    let img = decode(bytes)?;
    crop_decoded(&img, rect, quality)
}

/// Decode a frame, compute its crop rectangle and crop it in one pass.
pub fn crop_frame(
    bytes: &[u8],
    viewport: ViewportDimensions,
    scale_adjustment: f64,
    quality: u8,
) -> Result<CroppedFrame, ImagingError> {
    let img = decode(bytes)?;
    let rect = compute_crop_rect(img.width(), img.height(), viewport, scale_adjustment);
    debug!(
        "Frame {}x{}, crop region ({}, {}) {}x{}",
        img.width(),
        img.height(),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );

    let jpeg = crop_decoded(&img, &rect, quality)?;
    Ok(CroppedFrame { rect, jpeg })
}

/// Grayscale, contrast and blur an encoded image to help OCR.
///
/// Best effort: any failure returns the input bytes unchanged.
pub fn preprocess(bytes: &[u8], config: &PreprocessConfig) -> Vec<u8> {
    match try_preprocess(bytes, config) {
        Ok(processed) => processed,
        Err(e) => {
            warn!("Preprocessing failed, using original image: {}", e);
            bytes.to_vec()
        }
    }
}

fn try_preprocess(bytes: &[u8], config: &PreprocessConfig) -> Result<Vec<u8>, ImagingError> {
    let img = decode(bytes)?;

    // Drop alpha along with colour; OCR only needs luminance.
    let gray = DynamicImage::ImageLuma8(img.to_luma8());
    let mut processed = gray.adjust_contrast(config.contrast);
    if config.blur_sigma > 0.0 {
        processed = processed.blur(config.blur_sigma);
    }

    let mut buffer = Cursor::new(Vec::new());
    processed
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(ImagingError::Encode)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgba};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 128, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_image_dimensions() {
        assert_eq!(image_dimensions(&png(40, 30)).unwrap(), (40, 30));
        assert!(matches!(
            image_dimensions(b"not an image"),
            Err(ImagingError::Decode(_))
        ));
    }

    #[test]
    fn test_crop_image() {
        let jpeg = crop_image(&png(100, 80), &CropRect::new(10, 20, 50, 30), 90).unwrap();
        assert_eq!(image_dimensions(&jpeg).unwrap(), (50, 30));
    }

    #[test]
    fn test_crop_image_empty_region() {
        let result = crop_image(&png(10, 10), &CropRect::empty(), 90);
        assert!(matches!(result, Err(ImagingError::EmptyRegion(_))));
    }

    #[test]
    fn test_crop_frame_uses_geometry() {
        let viewport = ViewportDimensions::new(800.0, 400.0);
        let frame = crop_frame(&png(300, 400), viewport, 0.9, 90).unwrap();

        assert_eq!(frame.rect, compute_crop_rect(300, 400, viewport, 0.9));
        assert_eq!(
            image_dimensions(&frame.jpeg).unwrap(),
            (frame.rect.width, frame.rect.height)
        );
    }

    #[test]
    fn test_crop_frame_degenerate_viewport() {
        let result = crop_frame(&png(30, 40), ViewportDimensions::new(0.0, 0.0), 0.9, 90);
        assert!(matches!(result, Err(ImagingError::EmptyRegion(_))));
    }

    #[test]
    fn test_preprocess_grayscale() {
        let processed = preprocess(&png(16, 16), &PreprocessConfig::default());
        let img = image::load_from_memory(&processed).unwrap();
        assert_eq!(img.color(), ColorType::L8);
        assert_eq!((img.width(), img.height()), (16, 16));
    }

    #[test]
    fn test_preprocess_falls_back_on_garbage() {
        let garbage = b"definitely not a png".to_vec();
        assert_eq!(preprocess(&garbage, &PreprocessConfig::default()), garbage);
    }
}
