//! Watermark opacity.
//!
//! Compositing itself is `image::imageops::overlay` (source-over, clipped to
//! the photo).

use image::RgbaImage;

/// Multiply every alpha value by `opacity` (clamped to 0.0..=1.0).
pub fn apply_opacity(mark: &mut RgbaImage, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }

    for pixel in mark.pixels_mut() {
        pixel[3] = (pixel[3] as f32 * opacity).round() as u8;
    }
}
