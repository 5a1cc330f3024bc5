//! File filtering logic for the scanner.

use super::ImageKind;
use crate::core::naming;
use std::path::Path;

/// Decides which files of the input directory take part in a run
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFilter;

impl ImageFilter {
    /// Create a new filter
    pub fn new() -> Self {
        Self
    }

    /// Classify a file, or `None` when it should be skipped.
    ///
    /// Leftover temporary conversions are skipped; cleanup removes them.
    pub fn classify(&self, path: &Path) -> Option<ImageKind> {
        if naming::is_intermediate(path) {
            return None;
        }
        ImageKind::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_jpeg_and_png() {
        let filter = ImageFilter::new();
        assert_eq!(filter.classify(Path::new("/photos/image.jpg")), Some(ImageKind::Jpeg));
        assert_eq!(filter.classify(Path::new("/photos/image.JPEG")), Some(ImageKind::Jpeg));
        assert_eq!(filter.classify(Path::new("/photos/photo.PNG")), Some(ImageKind::Png));
    }

    #[test]
    fn filter_queues_heic() {
        let filter = ImageFilter::new();
        assert_eq!(filter.classify(Path::new("/photos/IMG_1234.HEIC")), Some(ImageKind::Heic));
    }

    #[test]
    fn filter_excludes_non_images() {
        let filter = ImageFilter::new();
        assert_eq!(filter.classify(Path::new("/photos/notes.txt")), None);
        assert_eq!(filter.classify(Path::new("/photos/video.mp4")), None);
        assert_eq!(filter.classify(Path::new("/photos/no_extension")), None);
    }

    #[test]
    fn filter_skips_leftover_conversions() {
        let filter = ImageFilter::new();
        assert_eq!(filter.classify(Path::new("/photos/IMG_1_wm-temp.jpg")), None);
    }
}
