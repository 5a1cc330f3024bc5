//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the watermarking pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Discovery phase events
    Scan(ScanEvent),
    /// HEIC conversion phase events
    Convert(ConvertEvent),
    /// Watermarking phase events
    Watermark(WatermarkEvent),
    /// Cleanup phase events
    Cleanup(CleanupEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events while classifying the input directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { path: PathBuf },
    /// A usable file was found
    ImageFound { path: PathBuf, needs_conversion: bool },
    /// Scanning completed
    Completed {
        processable: usize,
        pending_conversion: usize,
    },
}

/// Events while converting HEIC files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConvertEvent {
    /// Conversion has started
    Started { total: usize },
    /// One more file was converted
    Progress(StageProgress),
    /// Conversion completed
    Completed { converted: usize },
}

/// Events while watermarking images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WatermarkEvent {
    /// Watermarking has started
    Started { total: usize },
    /// One more image was written
    Progress(StageProgress),
    /// Watermarking completed
    Completed { written: usize },
}

/// Events while removing temporary files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CleanupEvent {
    /// Cleanup has started
    Started { path: PathBuf },
    /// A temporary file was deleted
    Removed { path: PathBuf },
    /// Cleanup completed
    Completed { removed: usize },
}

/// Per-file progress inside a phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageProgress {
    /// Files finished so far
    pub completed: usize,
    /// Files in this phase
    pub total: usize,
    /// File that was just finished
    pub current_path: PathBuf,
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: PipelinePhase },
    /// Pipeline completed successfully
    Completed { summary: PipelineSummary },
    /// Pipeline hit a fatal error in the given phase
    Error {
        phase: PipelinePhase,
        message: String,
    },
}

/// Phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelinePhase {
    Discovering,
    Converting,
    Watermarking,
    CleaningUp,
}

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// PNG, JPEG and HEIC files found in the input directory
    pub images_found: usize,
    /// HEIC files converted to temporary JPEGs
    pub heic_converted: usize,
    /// Watermarked images written
    pub images_written: usize,
    /// Temporary files deleted by cleanup
    pub temp_files_removed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Discovering => write!(f, "Finding images"),
            PipelinePhase::Converting => write!(f, "Converting HEIC"),
            PipelinePhase::Watermarking => write!(f, "Processing images"),
            PipelinePhase::CleaningUp => write!(f, "Cleaning up"),
        }
    }
}
