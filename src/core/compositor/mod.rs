//! # Compositor Module
//!
//! Stamps the watermark onto one photo at a time.
//!
//! ## Steps per photo
//! 1. Scale the watermark to 1/8 of the photo width, keeping its aspect ratio
//! 2. Multiply its alpha by the configured opacity
//! 3. Place it flush with the chosen corner
//! 4. Lay it over the photo (source-over) and write the result

mod blend;
mod placement;

pub use blend::apply_opacity;
pub use placement::{watermark_size, WIDTH_DIVISOR};

use crate::core::codec::{self, FastDecoder, FastResizer};
use crate::core::config::{Corner, WatermarkConfig};
use crate::core::naming;
use crate::error::{DecodeError, WatermarkerError, WriteError};
use crate::events::{Event, EventSender, StageProgress, WatermarkEvent};
use image::{imageops, DynamicImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Watermark every source, one at a time, in order.
///
/// The watermark is only loaded when there is something to stamp. Returns
/// the written paths in source order; the first failure stops the stage.
pub fn watermark_all(
    config: &WatermarkConfig,
    sources: &[PathBuf],
    events: &EventSender,
) -> Result<Vec<PathBuf>, WatermarkerError> {
    let total = sources.len();
    events.send(Event::Watermark(WatermarkEvent::Started { total }));

    let mut written = Vec::with_capacity(total);

    if !sources.is_empty() {
        let mut compositor = Compositor::new(config)?;

        for (index, source) in sources.iter().enumerate() {
            written.push(compositor.process_file(source, &config.output_dir)?);

            events.send(Event::Watermark(WatermarkEvent::Progress(StageProgress {
                completed: index + 1,
                total,
                current_path: source.clone(),
            })));
        }
    }

    info!(count = written.len(), output = %config.output_dir.display(), "watermarking finished");
    events.send(Event::Watermark(WatermarkEvent::Completed {
        written: written.len(),
    }));

    Ok(written)
}

/// Applies one watermark to many photos.
///
/// The watermark is decoded once; every photo gets its own scaled copy.
pub struct Compositor {
    watermark: RgbaImage,
    corner: Corner,
    opacity: f32,
    resizer: FastResizer,
}

impl Compositor {
    /// Load the watermark named by `config`
    pub fn new(config: &WatermarkConfig) -> Result<Self, DecodeError> {
        let watermark = FastDecoder::decode(&config.watermark_path)?.to_rgba8();
        Ok(Self::from_image(watermark, config.corner, config.opacity))
    }

    /// Build a compositor around an already decoded watermark
    pub fn from_image(watermark: RgbaImage, corner: Corner, opacity: f32) -> Self {
        Self {
            watermark,
            corner,
            opacity,
            resizer: FastResizer::new(),
        }
    }

    /// Watermarked copy of `source`
    pub fn apply(&mut self, source: &DynamicImage) -> Result<RgbaImage, DecodeError> {
        let mut base = source.to_rgba8();
        let base_size = base.dimensions();

        let (width, height) = watermark_size(base_size, self.watermark.dimensions());
        let mut mark = self.resizer.resize_rgba(&self.watermark, width, height)?;
        apply_opacity(&mut mark, self.opacity);

        let (x, y) = self.corner.offset(base_size, (width, height));
        imageops::overlay(&mut base, &mark, i64::from(x), i64::from(y));

        Ok(base)
    }

    /// Watermark the photo at `source` and write it into `output_dir`.
    ///
    /// The output directory is created if needed. Returns the written path.
    pub fn process_file(
        &mut self,
        source: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, WatermarkerError> {
        let image = FastDecoder::decode(source)?;
        let watermarked = self.apply(&image)?;
        drop(image);

        fs::create_dir_all(output_dir).map_err(|e| WriteError::CreateDirectory {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        let target = output_dir.join(naming::output_file_name(source));
        codec::encode(&watermarked, &target)?;
        debug!(source = %source.display(), target = %target.display(), "watermarked");

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([10, 20, 30, 255])
            } else {
                Rgba([200, 150, 100, 255])
            }
        })
    }

    fn white(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]))
    }

    fn covered(corner: Corner, x: u32, y: u32, size: u32, mark: u32) -> bool {
        let (ox, oy) = corner.offset((size, size), (mark, mark));
        x >= ox && x < ox + mark && y >= oy && y < oy + mark
    }

    #[test]
    fn every_corner_gets_exactly_one_block() {
        let source = DynamicImage::ImageRgba8(checkerboard(32, 32));

        for corner in Corner::ALL {
            let mut compositor = Compositor::from_image(white(4), corner, 1.0);
            let result = compositor.apply(&source).unwrap();

            for (x, y, pixel) in result.enumerate_pixels() {
                if covered(corner, x, y, 32, 4) {
                    assert_eq!(pixel, &Rgba([255, 255, 255, 255]), "{corner} at {x},{y}");
                } else {
                    assert_eq!(pixel, source.as_rgba8().unwrap().get_pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn zero_opacity_returns_the_source() {
        let source = DynamicImage::ImageRgba8(checkerboard(40, 24));
        let mut compositor = Compositor::from_image(white(9), Corner::TopRight, 0.0);

        let result = compositor.apply(&source).unwrap();

        assert_eq!(&result, source.as_rgba8().unwrap());
    }

    #[test]
    fn rgb_sources_come_back_opaque() {
        let source = DynamicImage::ImageRgb8(image::RgbImage::new(16, 16));
        let mut compositor = Compositor::from_image(white(2), Corner::BottomLeft, 0.7);

        let result = compositor.apply(&source).unwrap();

        assert!(result.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn faded_mark_stays_white_on_transparent_photo() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(16, 16));
        let mut compositor = Compositor::from_image(white(2), Corner::BottomRight, 0.5);

        let result = compositor.apply(&source).unwrap();

        let stamped = result.get_pixel(15, 15);
        assert!(stamped.0[..3].iter().all(|&c| c >= 254), "{:?}", stamped);
        assert!(stamped[3].abs_diff(128) <= 1, "{:?}", stamped);
        assert_eq!(result.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn process_file_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.png");
        checkerboard(16, 16).save(&source).unwrap();
        let output_dir = temp_dir.path().join("out").join("nested");

        let mut compositor = Compositor::from_image(white(2), Corner::BottomRight, 1.0);
        let written = compositor.process_file(&source, &output_dir).unwrap();

        assert_eq!(written, output_dir.join("a.png"));
        let result = image::open(&written).unwrap().to_rgba8();
        assert_eq!(result.get_pixel(15, 15), &Rgba([255, 255, 255, 255]));
        assert_eq!(result.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn converted_files_are_renamed() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("IMG_7_wm-temp.jpg");
        image::RgbImage::new(16, 16).save(&source).unwrap();

        let mut compositor = Compositor::from_image(white(2), Corner::TopLeft, 0.7);
        let written = compositor
            .process_file(&source, &temp_dir.path().join("out"))
            .unwrap();

        assert_eq!(written.file_name().unwrap(), "IMG_7_heic.jpg");
        assert!(written.exists());
    }

    #[test]
    fn watermark_all_keeps_source_order() {
        let temp_dir = TempDir::new().unwrap();
        let watermark = temp_dir.path().join("wm.png");
        white(3).save(&watermark).unwrap();
        let sources: Vec<PathBuf> = ["b.png", "a.png"]
            .iter()
            .map(|name| {
                let path = temp_dir.path().join(name);
                checkerboard(24, 24).save(&path).unwrap();
                path
            })
            .collect();
        let config = WatermarkConfig {
            input_dir: temp_dir.path().to_path_buf(),
            output_dir: temp_dir.path().join("out"),
            watermark_path: watermark,
            corner: Corner::TopLeft,
            opacity: 1.0,
        };

        let written = watermark_all(&config, &sources, &crate::events::null_sender()).unwrap();

        assert_eq!(
            written,
            vec![config.output_dir.join("b.png"), config.output_dir.join("a.png")]
        );
    }

    #[test]
    fn nothing_to_stamp_skips_the_watermark() {
        let config = WatermarkConfig {
            watermark_path: PathBuf::from("/nonexistent/watermark.png"),
            ..Default::default()
        };

        let written = watermark_all(&config, &[], &crate::events::null_sender()).unwrap();

        assert!(written.is_empty());
    }

    #[test]
    fn missing_watermark_is_decode_error() {
        let config = WatermarkConfig {
            watermark_path: PathBuf::from("/nonexistent/watermark.png"),
            ..Default::default()
        };
        assert!(matches!(
            Compositor::new(&config),
            Err(DecodeError::Io { .. })
        ));
    }

    #[test]
    fn undecodable_source_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();

        let mut compositor = Compositor::from_image(white(2), Corner::TopLeft, 1.0);
        let result = compositor.process_file(&source, &temp_dir.path().join("out"));

        assert!(matches!(result, Err(WatermarkerError::Decode(_))));
        assert!(!temp_dir.path().join("out").exists());
    }
}
