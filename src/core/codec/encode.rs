//! Encoding watermarked images to disk.

use crate::core::scanner::ImageKind;
use crate::error::WriteError;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JPEG quality for written images
pub const JPEG_QUALITY: u8 = 100;

/// Write `image` to `path`, picking the format from the extension.
///
/// JPEG has no alpha channel, so JPEG output is flattened to RGB.
pub fn encode(image: &RgbaImage, path: &Path) -> Result<(), WriteError> {
    let kind = match ImageKind::from_path(path) {
        Some(kind @ (ImageKind::Jpeg | ImageKind::Png)) => kind,
        _ => {
            return Err(WriteError::Encode {
                path: path.to_path_buf(),
                reason: "only .png, .jpg and .jpeg outputs are supported".to_string(),
            })
        }
    };

    let file = File::create(path).map_err(|e| WriteError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = if kind == ImageKind::Jpeg {
        let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(&rgb)
    } else {
        PngEncoder::new(&mut writer).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
    };

    encoded.map_err(|e| WriteError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    writer.flush().map_err(|e| WriteError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
