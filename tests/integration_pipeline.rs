//! Integration tests for the pipeline module.
//!
//! These tests verify end-to-end pipeline behavior including:
//! - Pixel-exact watermark placement
//! - HEIC conversion with temporary file cleanup
//! - Fail-fast error handling

use assert_fs::prelude::*;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use photo_watermarker::core::pipeline::Pipeline;
use photo_watermarker::core::{Corner, HeicConverter};
use photo_watermarker::error::{ConversionError, WatermarkerError};
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Stands in for the platform tool: every HEIC becomes the same 64x48 JPEG
struct SolidJpegConverter;

impl HeicConverter for SolidJpegConverter {
    fn to_jpeg(&self, _heic: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let mut bytes = Vec::new();
        RgbImage::from_pixel(64, 48, Rgb([40, 80, 120]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .map_err(|e| ConversionError::MissingOutput {
                reason: e.to_string(),
            })?;
        Ok(bytes)
    }
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 5) as u8, 200, 255])
    })
}

fn save_white_mark(path: &Path, size: u32) {
    RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]))
        .save(path)
        .unwrap();
}

fn marker_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains("_wm-temp"))
        .collect()
}

#[test]
fn opaque_mark_replaces_exactly_the_bottom_right_block() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("images");
    input.create_dir_all().unwrap();
    let original = gradient(32, 32);
    original.save(input.child("a.png").path()).unwrap();
    save_white_mark(temp.child("wm.png").path(), 4);

    let pipeline = Pipeline::builder()
        .input_dir(input.path())
        .output_dir(temp.child("output").path())
        .watermark(temp.child("wm.png").path())
        .corner(Corner::BottomRight)
        .opacity(1.0)
        .build()
        .unwrap();

    let result = pipeline.run().unwrap();

    assert_eq!(result.outputs, vec![temp.child("output/a.png").to_path_buf()]);
    let written = image::open(temp.child("output/a.png").path())
        .unwrap()
        .to_rgba8();
    for (x, y, pixel) in written.enumerate_pixels() {
        if (28..32).contains(&x) && (28..32).contains(&y) {
            assert_eq!(pixel, &Rgba([255, 255, 255, 255]), "mark at {x},{y}");
        } else {
            assert_eq!(pixel, original.get_pixel(x, y), "photo at {x},{y}");
        }
    }
}

#[test]
fn invisible_mark_leaves_photo_untouched() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("images");
    input.create_dir_all().unwrap();
    let original = gradient(40, 24);
    original.save(input.child("a.png").path()).unwrap();
    save_white_mark(temp.child("wm.png").path(), 16);

    let pipeline = Pipeline::builder()
        .input_dir(input.path())
        .output_dir(temp.child("output").path())
        .watermark(temp.child("wm.png").path())
        .corner(Corner::TopLeft)
        .opacity(0.0)
        .build()
        .unwrap();

    pipeline.run().unwrap();

    let written = image::open(temp.child("output/a.png").path())
        .unwrap()
        .to_rgba8();
    assert_eq!(written, original);
}

#[test]
fn heic_files_are_converted_watermarked_and_cleaned_up() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("images");
    input.create_dir_all().unwrap();
    input.child("IMG_0001.HEIC").write_binary(b"heic bytes").unwrap();
    input.child("notes.txt").write_str("not an image").unwrap();
    gradient(16, 16).save(input.child("photo.PNG").path()).unwrap();
    save_white_mark(temp.child("wm.png").path(), 8);

    let pipeline = Pipeline::builder()
        .input_dir(input.path())
        .output_dir(temp.child("output").path())
        .watermark(temp.child("wm.png").path())
        .converter(Box::new(SolidJpegConverter))
        .build()
        .unwrap();

    let result = pipeline.run().unwrap();

    assert_eq!(result.images_found, 2);
    assert_eq!(result.heic_converted, 1);
    assert_eq!(result.temp_files_removed, 1);
    // Converted files are processed after the directly usable ones
    assert_eq!(
        result.outputs,
        vec![
            temp.child("output/photo.PNG").to_path_buf(),
            temp.child("output/IMG_0001_heic.jpg").to_path_buf(),
        ]
    );

    temp.child("output/IMG_0001_heic.jpg")
        .assert(predicate::path::is_file());
    temp.child("output/notes.txt").assert(predicate::path::missing());
    input.child("IMG_0001.HEIC").assert(predicate::path::is_file());
    assert!(marker_files(input.path()).is_empty());

    let converted = image::open(temp.child("output/IMG_0001_heic.jpg").path()).unwrap();
    assert_eq!((converted.width(), converted.height()), (64, 48));
}

#[test]
fn broken_image_aborts_but_temporary_files_are_still_removed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("images");
    input.create_dir_all().unwrap();
    input.child("IMG_0002.heic").write_binary(b"heic bytes").unwrap();
    input.child("broken.jpg").write_str("not a jpeg").unwrap();
    save_white_mark(temp.child("wm.png").path(), 8);

    let pipeline = Pipeline::builder()
        .input_dir(input.path())
        .output_dir(temp.child("output").path())
        .watermark(temp.child("wm.png").path())
        .converter(Box::new(SolidJpegConverter))
        .build()
        .unwrap();

    let result = pipeline.run();

    assert!(matches!(result, Err(WatermarkerError::Decode(_))));
    assert!(marker_files(input.path()).is_empty());
}

#[test]
fn missing_watermark_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("images");
    input.create_dir_all().unwrap();
    gradient(16, 16).save(input.child("a.png").path()).unwrap();

    let pipeline = Pipeline::builder()
        .input_dir(input.path())
        .output_dir(temp.child("output").path())
        .watermark(temp.child("nope.png").path())
        .build()
        .unwrap();

    assert!(matches!(pipeline.run(), Err(WatermarkerError::Decode(_))));
    temp.child("output").assert(predicate::path::missing());
}

#[test]
fn missing_input_directory_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();

    let pipeline = Pipeline::builder()
        .input_dir(temp.child("does-not-exist").path())
        .output_dir(temp.child("output").path())
        .build()
        .unwrap();

    assert!(matches!(pipeline.run(), Err(WatermarkerError::Scan(_))));
}
