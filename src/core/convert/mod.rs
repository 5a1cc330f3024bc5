//! # Convert Module
//!
//! Turns HEIC files into temporary JPEGs the compositor can decode.
//!
//! The temporary file for `IMG_0042.heic` is `IMG_0042_wm-temp.jpg` in the
//! same directory; cleanup removes it at the end of the run.

mod system;

pub use system::SystemConverter;

use crate::core::naming;
use crate::error::{ConversionError, WatermarkerError, WriteError};
use crate::events::{ConvertEvent, Event, EventSender, StageProgress};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Converts HEIC bytes into JPEG bytes at maximum quality.
///
/// Implement this trait to plug in another decoder (e.g., for testing).
pub trait HeicConverter: Send + Sync {
    /// Convert one HEIC image
    fn to_jpeg(&self, heic: &[u8]) -> Result<Vec<u8>, ConversionError>;
}

/// Convert every pending HEIC file, one at a time, in order.
///
/// Returns the temporary JPEG paths in the same order. The first failure
/// stops the stage; files converted before it stay on disk for cleanup.
pub fn convert_all(
    pending: &[PathBuf],
    converter: &dyn HeicConverter,
    events: &EventSender,
) -> Result<Vec<PathBuf>, WatermarkerError> {
    let total = pending.len();
    events.send(Event::Convert(ConvertEvent::Started { total }));

    let mut converted = Vec::with_capacity(total);

    for (index, heic) in pending.iter().enumerate() {
        let bytes = fs::read(heic).map_err(|e| ConversionError::Read {
            path: heic.clone(),
            source: e,
        })?;

        let jpeg = converter.to_jpeg(&bytes)?;

        let target = naming::intermediate_path(heic);
        fs::write(&target, jpeg).map_err(|e| WriteError::Io {
            path: target.clone(),
            source: e,
        })?;
        debug!(source = %heic.display(), target = %target.display(), "converted HEIC");

        events.send(Event::Convert(ConvertEvent::Progress(StageProgress {
            completed: index + 1,
            total,
            current_path: heic.clone(),
        })));

        converted.push(target);
    }

    info!(count = converted.len(), "HEIC conversion finished");
    events.send(Event::Convert(ConvertEvent::Completed {
        converted: converted.len(),
    }));

    Ok(converted)
}
