//! File naming for temporary conversions and watermarked outputs.

use std::path::{Path, PathBuf};

/// Marks JPEGs produced from HEIC files; anything carrying it is deleted by cleanup
pub const TEMP_MARKER: &str = "_wm-temp";

/// Replaces [`TEMP_MARKER`] in the names of watermarked outputs
pub const PROCESSED_MARKER: &str = "_heic";

/// Path of the temporary JPEG for a HEIC file: `<stem>_wm-temp.jpg` in the same directory.
pub fn intermediate_path(heic: &Path) -> PathBuf {
    let stem = heic
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    heic.with_file_name(format!("{stem}{TEMP_MARKER}.jpg"))
}

/// Whether a file name carries the conversion marker
pub fn is_intermediate(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(TEMP_MARKER))
        .unwrap_or(false)
}

/// File name a source image is written under in the output directory.
///
/// Temporary conversions lose their marker in favour of [`PROCESSED_MARKER`];
/// every other name is kept as is.
pub fn output_file_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().replace(TEMP_MARKER, PROCESSED_MARKER))
        .unwrap_or_default()
}
