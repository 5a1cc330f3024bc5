//! Run configuration.

use crate::error::WatermarkerError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Default input directory
pub const DEFAULT_INPUT_DIR: &str = "images/";
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output/";
/// Default watermark image
pub const DEFAULT_WATERMARK: &str = "watermark.png";
/// Default watermark opacity
pub const DEFAULT_OPACITY: f32 = 0.7;

/// Corner of the photo the watermark is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Corner {
    /// All corners, in the order the selection menu lists them
    pub const ALL: [Corner; 4] = [
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Corner::TopLeft => "Top left",
            Corner::TopRight => "Top right",
            Corner::BottomLeft => "Bottom left",
            Corner::BottomRight => "Bottom right",
        }
    }

    /// Top-left position of a `mark`-sized block inside `base`, flush with this corner.
    ///
    /// `mark` must fit inside `base`; the compositor guarantees that by
    /// fitting the watermark before placing it.
    pub fn offset(&self, base: (u32, u32), mark: (u32, u32)) -> (u32, u32) {
        let right = base.0.saturating_sub(mark.0);
        let bottom = base.1.saturating_sub(mark.1);

        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (right, 0),
            Corner::BottomLeft => (0, bottom),
            Corner::BottomRight => (right, bottom),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable configuration shared by every stage of a run
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkConfig {
    /// Directory holding the photos (and the temporary conversions)
    pub input_dir: PathBuf,
    /// Directory the watermarked photos are written to
    pub output_dir: PathBuf,
    /// Watermark image
    pub watermark_path: PathBuf,
    /// Placement of the watermark
    pub corner: Corner,
    /// Alpha multiplier for the watermark, 0.0 (invisible) to 1.0 (as is)
    pub opacity: f32,
}

impl WatermarkConfig {
    /// Check the values that clap cannot check for us
    pub fn validate(&self) -> Result<(), WatermarkerError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(WatermarkerError::Config(format!(
                "opacity must be between 0.0 and 1.0, got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            watermark_path: PathBuf::from(DEFAULT_WATERMARK),
            corner: Corner::default(),
            opacity: DEFAULT_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_each_corner() {
        let base = (100, 80);
        let mark = (12, 5);

        assert_eq!(Corner::TopLeft.offset(base, mark), (0, 0));
        assert_eq!(Corner::TopRight.offset(base, mark), (88, 0));
        assert_eq!(Corner::BottomLeft.offset(base, mark), (0, 75));
        assert_eq!(Corner::BottomRight.offset(base, mark), (88, 75));
    }

    #[test]
    fn offsets_keep_mark_inside_base() {
        for width in [1u32, 7, 64, 333] {
            for height in [1u32, 9, 48, 250] {
                for mark_w in 1..=width.min(40) {
                    let mark_h = (mark_w / 2).clamp(1, height);
                    for corner in Corner::ALL {
                        let (x, y) = corner.offset((width, height), (mark_w, mark_h));
                        assert!(x <= width - mark_w, "{corner} x={x} for {width}x{height}");
                        assert!(y <= height - mark_h, "{corner} y={y} for {width}x{height}");
                    }
                }
            }
        }
    }

    #[test]
    fn menu_lists_bottom_right_first() {
        assert_eq!(Corner::ALL[0], Corner::BottomRight);
        assert_eq!(Corner::ALL[0].to_string(), "Bottom right");
        assert_eq!(Corner::default(), Corner::BottomRight);
    }

    #[test]
    fn default_config_uses_documented_paths() {
        let config = WatermarkConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("images/"));
        assert_eq!(config.output_dir, PathBuf::from("output/"));
        assert_eq!(config.watermark_path, PathBuf::from("watermark.png"));
        assert!((config.opacity - 0.7).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn opacity_out_of_range_is_rejected() {
        for opacity in [-0.1, 1.5, f32::NAN] {
            let config = WatermarkConfig {
                opacity,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(WatermarkerError::Config(_))
            ));
        }
    }

    #[test]
    fn corner_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Corner::TopRight).unwrap();
        assert_eq!(json, "\"top-right\"");
    }
}
