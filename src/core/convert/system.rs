//! HEIC conversion through the platform's command-line tools.
//!
//! - macOS: `sips`, which ships with the OS
//! - elsewhere: `heif-convert` from libheif (`libheif-examples` on Debian/Ubuntu)

use super::HeicConverter;
use crate::error::ConversionError;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Best JPEG quality the tools accept
const MAX_QUALITY: u8 = 100;

/// Converter that shells out to `sips` or `heif-convert`
#[derive(Debug, Clone)]
pub struct SystemConverter {
    quality: u8,
}

impl SystemConverter {
    /// Create a converter producing maximum-quality JPEGs
    pub fn new() -> Self {
        Self {
            quality: MAX_QUALITY,
        }
    }

    /// Name of the tool this platform uses
    pub fn tool() -> &'static str {
        if cfg!(target_os = "macos") {
            "sips"
        } else {
            "heif-convert"
        }
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(Self::tool());
        if cfg!(target_os = "macos") {
            command
                .args(["-s", "format", "jpeg", "-s", "formatOptions"])
                .arg(self.quality.to_string())
                .arg(input)
                .arg("--out")
                .arg(output);
        } else {
            command
                .arg("-q")
                .arg(self.quality.to_string())
                .arg(input)
                .arg(output);
        }
        command
    }
}

impl Default for SystemConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HeicConverter for SystemConverter {
    fn to_jpeg(&self, heic: &[u8]) -> Result<Vec<u8>, ConversionError> {
        // The tools only work on files, so stage the bytes in a private directory
        let workdir = tempfile::tempdir().map_err(|e| ConversionError::Scratch { source: e })?;
        let input = workdir.path().join("source.heic");
        let output = workdir.path().join("converted.jpg");

        fs::write(&input, heic).map_err(|e| ConversionError::Scratch { source: e })?;

        let result = self
            .command(&input, &output)
            .output()
            .map_err(|e| ConversionError::ToolUnavailable {
                tool: Self::tool().to_string(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(ConversionError::ToolFailed {
                tool: Self::tool().to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let jpeg = fs::read(&output).map_err(|e| ConversionError::MissingOutput {
            reason: format!("{} did not write {}: {}", Self::tool(), output.display(), e),
        })?;
        debug!(bytes_in = heic.len(), bytes_out = jpeg.len(), "HEIC converted");

        Ok(jpeg)
    }
}
