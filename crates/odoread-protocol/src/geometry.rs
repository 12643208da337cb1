//! Frame geometry types.

use serde::{Deserialize, Serialize};

/// Axis-aligned crop rectangle in original-image pixel coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CropRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CropRect {
    /// Create a rectangle from its origin and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-area rectangle returned for degenerate inputs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the rectangle covers no pixels. Callers skip cropping when true.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether the rectangle lies inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(image_width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(image_height)
    }
}

/// Logical size of the on-screen camera preview container.
///
/// Only used as the scale reference for crop geometry. The caller sets it on
/// every preview size change and keeps it until the next one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewportDimensions {
    pub width: f64,
    pub height: f64,
}

impl ViewportDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Capture orientation guessed from the frame's aspect.
///
/// This approximates the device rotation; it does not describe the true
/// aspect ratio of the sensor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Landscape capture (`height <= width`).
    Normal,
    /// Portrait capture.
    Inverse,
}

impl Orientation {
    /// Classify a frame by its pixel dimensions.
    pub fn of_image(width: u32, height: u32) -> Self {
        if height <= width {
            Orientation::Normal
        } else {
            Orientation::Inverse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_rect_empty() {
        assert!(CropRect::empty().is_empty());
        assert!(CropRect::new(10, 10, 0, 5).is_empty());
        assert!(!CropRect::new(0, 0, 1, 1).is_empty());
        assert_eq!(CropRect::new(0, 0, 3, 4).area(), 12);
    }

    #[test]
    fn test_crop_rect_fits_within() {
        let rect = CropRect::new(600, 650, 1800, 2700);
        assert!(rect.fits_within(3000, 4000));
        assert!(!rect.fits_within(2000, 4000));
        assert!(!CropRect::new(u32::MAX, 0, 1, 1).fits_within(u32::MAX, 1));
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::of_image(4000, 3000), Orientation::Normal);
        assert_eq!(Orientation::of_image(3000, 3000), Orientation::Normal);
        assert_eq!(Orientation::of_image(3000, 4000), Orientation::Inverse);
    }

    #[test]
    fn test_viewport_positive() {
        assert!(ViewportDimensions::new(800.0, 400.0).is_positive());
        assert!(!ViewportDimensions::new(0.0, 400.0).is_positive());
        assert!(!ViewportDimensions::new(800.0, -1.0).is_positive());
        assert!(!ViewportDimensions::new(f64::NAN, 400.0).is_positive());
    }

    #[test]
    fn test_crop_rect_json() {
        let json = serde_json::to_string(&CropRect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
    }
}
