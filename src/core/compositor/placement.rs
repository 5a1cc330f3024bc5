//! Watermark sizing relative to the photo.

/// The watermark is scaled to this fraction of the photo width
pub const WIDTH_DIVISOR: u32 = 8;

/// Size the watermark is scaled to before it is placed on a `base`-sized photo.
///
/// Width is `base width / 8` and height follows the watermark's aspect
/// ratio, both rounded and at least one pixel. A watermark that would end up
/// taller than the photo is fitted to the photo height instead, keeping the
/// aspect ratio, so every corner offset stays inside the photo.
pub fn watermark_size(base: (u32, u32), mark: (u32, u32)) -> (u32, u32) {
    let (base_w, base_h) = base;
    let (mark_w, mark_h) = (mark.0.max(1) as f64, mark.1.max(1) as f64);

    let width = scaled(base_w as f64 / WIDTH_DIVISOR as f64, base_w);
    let height = scaled(mark_h * width as f64 / mark_w, u32::MAX);

    if height <= base_h {
        return (width, height);
    }

    let height = base_h.max(1);
    let width = scaled(mark_w * height as f64 / mark_h, base_w);
    (width, height)
}

fn scaled(value: f64, max: u32) -> u32 {
    (value.round() as u32).clamp(1, max.max(1))
}
