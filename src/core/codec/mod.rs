//! # Codec Module
//!
//! Raster I/O for the compositor.
//!
//! - `fast_decode` - JPEG through zune-jpeg, everything else through `image`
//! - `fast_resize` - SIMD RGBA resizing through fast_image_resize
//! - `encode` - writes RGBA buffers in the format the file extension names

mod encode;
mod fast_decode;
mod fast_resize;

pub use encode::{encode, JPEG_QUALITY};
pub use fast_decode::FastDecoder;
pub use fast_resize::{resize_rgba, FastResizer};
