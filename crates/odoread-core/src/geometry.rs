//! Crop geometry for the region of interest in a captured frame.
//!
//! The preview shows a capture border centred in an assumed 4:3 UI
//! rectangle. This module maps that border from UI space back onto the
//! original frame so OCR only sees the odometer.

use odoread_protocol::{CropRect, Orientation, ViewportDimensions};

/// Default shrink factor applied to the capture border.
pub const DEFAULT_SCALE_ADJUSTMENT: f64 = 0.98;

/// Compute the crop rectangle for a frame of `image_width` x `image_height`.
///
/// `scale_adjustment` shrinks the rectangle to keep border artifacts out and
/// should lie in (0, 1]. Degenerate inputs (non-positive viewport, zero-sized
/// image, non-positive scale) produce a zero-area rectangle; callers check
/// [`CropRect::is_empty`] before cropping. Never panics.
pub fn compute_crop_rect(
    image_width: u32,
    image_height: u32,
    viewport: ViewportDimensions,
    scale_adjustment: f64,
) -> CropRect {
    if !viewport.is_positive()
        || image_width == 0
        || image_height == 0
        || !scale_adjustment.is_finite()
        || scale_adjustment <= 0.0
    {
        return CropRect::empty();
    }

    let orientation = Orientation::of_image(image_width, image_height);
    let anchor = viewport.width;

    let (ui_width, ui_height, rect_width, rect_height) = match orientation {
        Orientation::Normal => {
            let ui_width = anchor;
            let ui_height = anchor * 3.0 / 4.0;
            (
                ui_width,
                ui_height,
                ui_height * scale_adjustment,
                (ui_width / 2.0) * scale_adjustment,
            )
        }
        Orientation::Inverse => {
            let ui_height = anchor;
            let ui_width = anchor * 3.0 / 4.0;
            (
                ui_width,
                ui_height,
                (ui_height / 2.0) * scale_adjustment,
                ui_width * scale_adjustment,
            )
        }
    };

    let rect_x = (ui_width - rect_width) / 2.0;
    let rect_y = (ui_height - rect_height) / 2.0;

    let scale_x = f64::from(image_width) / ui_width;
    let scale_y = f64::from(image_height) / ui_height;

    // `as` truncates toward zero and saturates, NaN becomes 0.
    let crop_x = ((rect_x * scale_x) as i64).max(0);
    let crop_y = ((rect_y * scale_y) as i64).max(0);
    let crop_width = (rect_width * scale_x) as i64;
    let crop_height = (rect_height * scale_y) as i64;

    let (x, width) = clamp_span(crop_x, crop_width, image_width);
    let (y, height) = clamp_span(crop_y, crop_height, image_height);

    CropRect::new(x, y, width, height)
}

/// Clamp an origin/length pair so it stays within `0..=extent`.
fn clamp_span(origin: i64, length: i64, extent: u32) -> (u32, u32) {
    let extent = i64::from(extent);
    let origin = origin.clamp(0, extent);
    let length = length.clamp(0, extent - origin);
    // Both values are within 0..=u32::MAX after clamping.
    (origin as u32, length as u32)
}
