//! # Scanner Module
//!
//! Classifies the files of the input directory.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg) - watermarked directly
//! - PNG (.png) - watermarked directly
//! - HEIC (.heic) - iPhone photos, converted to JPEG first
//!
//! Only the top level of the directory is read; sub-directories are ignored.
//!
//! ## Example
//! ```rust,ignore
//! use photo_watermarker::core::scanner::DirectoryScanner;
//!
//! let discovery = DirectoryScanner::new().scan(Path::new("images/"))?;
//! println!("{} ready, {} to convert", discovery.processable.len(), discovery.pending_conversion.len());
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::DirectoryScanner;

use std::path::{Path, PathBuf};

/// Image formats the watermarker understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Heic,
}

impl ImageKind {
    /// Detect format from file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "heic" => Some(ImageKind::Heic),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the file has to be converted before it can be decoded
    pub fn needs_conversion(&self) -> bool {
        matches!(self, ImageKind::Heic)
    }
}

/// Files of one input directory, split by how they are handled.
///
/// Both lists are sorted by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// PNG and JPEG files
    pub processable: Vec<PathBuf>,
    /// HEIC files waiting for conversion
    pub pending_conversion: Vec<PathBuf>,
}

impl Discovery {
    /// Number of usable files found
    pub fn total(&self) -> usize {
        self.processable.len() + self.pending_conversion.len()
    }

    /// Whether nothing usable was found
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
