//! Directory listing implementation using walkdir.

use super::{filter::ImageFilter, Discovery};
use crate::error::ScanError;
use crate::events::{null_sender, Event, EventSender, ScanEvent};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Lists the top level of a directory and classifies its files
#[derive(Debug, Default)]
pub struct DirectoryScanner {
    filter: ImageFilter,
}

impl DirectoryScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self {
            filter: ImageFilter::new(),
        }
    }

    /// Scan a directory without progress reporting
    pub fn scan(&self, root: &Path) -> Result<Discovery, ScanError> {
        self.scan_with_events(root, &null_sender())
    }

    /// Scan a directory, reporting each usable file.
    ///
    /// Any unreadable entry fails the whole scan; a run never starts on a
    /// partial listing.
    pub fn scan_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<Discovery, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        events.send(Event::Scan(ScanEvent::Started {
            path: root.to_path_buf(),
        }));

        let mut discovery = Discovery::default();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry_result in walker {
            let entry = entry_result.map_err(|e| ScanError::ReadDirectory {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                source: std::io::Error::from(e),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(kind) = self.filter.classify(path) else {
                debug!(path = %path.display(), "skipping file");
                continue;
            };

            events.send(Event::Scan(ScanEvent::ImageFound {
                path: path.to_path_buf(),
                needs_conversion: kind.needs_conversion(),
            }));

            if kind.needs_conversion() {
                discovery.pending_conversion.push(path.to_path_buf());
            } else {
                discovery.processable.push(path.to_path_buf());
            }
        }

        events.send(Event::Scan(ScanEvent::Completed {
            processable: discovery.processable.len(),
            pending_conversion: discovery.pending_conversion.len(),
        }));

        Ok(discovery)
    }
}
