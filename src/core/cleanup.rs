//! Removal of temporary conversion files.

use crate::core::naming;
use crate::error::{ScanError, WatermarkerError, WriteError};
use crate::events::{CleanupEvent, Event, EventSender};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Delete every file in the top level of `input_dir` whose name carries the
/// conversion marker. Returns how many were removed.
///
/// The directory is listed afresh, so leftovers from earlier aborted runs
/// go too.
pub fn remove_intermediates(
    input_dir: &Path,
    events: &EventSender,
) -> Result<usize, WatermarkerError> {
    events.send(Event::Cleanup(CleanupEvent::Started {
        path: input_dir.to_path_buf(),
    }));

    let mut removed = 0;

    for entry_result in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry_result.map_err(|e| ScanError::ReadDirectory {
            path: input_dir.to_path_buf(),
            source: std::io::Error::from(e),
        })?;

        let path = entry.path();
        if entry.file_type().is_dir() || !naming::is_intermediate(path) {
            continue;
        }

        fs::remove_file(path).map_err(|e| WriteError::Remove {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "removed temporary file");

        events.send(Event::Cleanup(CleanupEvent::Removed {
            path: path.to_path_buf(),
        }));
        removed += 1;
    }

    info!(removed, "cleanup finished");
    events.send(Event::Cleanup(CleanupEvent::Completed { removed }));

    Ok(removed)
}
