//! Pipeline execution implementation.

use crate::core::cleanup;
use crate::core::compositor;
use crate::core::config::{Corner, WatermarkConfig};
use crate::core::convert::{self, HeicConverter, SystemConverter};
use crate::core::scanner::{DirectoryScanner, Discovery};
use crate::error::WatermarkerError;
use crate::events::{null_sender, Event, EventSender, PipelineEvent, PipelinePhase, PipelineSummary};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Result of pipeline execution
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    /// Watermarked images, in processing order
    pub outputs: Vec<PathBuf>,
    /// PNG, JPEG and HEIC files found
    pub images_found: usize,
    /// HEIC files converted
    pub heic_converted: usize,
    /// Temporary files deleted by cleanup
    pub temp_files_removed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl PipelineResult {
    /// Serializable summary of the run
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            images_found: self.images_found,
            heic_converted: self.heic_converted,
            images_written: self.outputs.len(),
            temp_files_removed: self.temp_files_removed,
            duration_ms: self.duration_ms,
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: WatermarkConfig,
    converter: Option<Box<dyn HeicConverter>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder with default settings
    pub fn new() -> Self {
        Self {
            config: WatermarkConfig::default(),
            converter: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: WatermarkConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory holding the photos
    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_dir = path.into();
        self
    }

    /// Directory the results are written to
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    /// Watermark image
    pub fn watermark(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.watermark_path = path.into();
        self
    }

    /// Corner the watermark is placed in
    pub fn corner(mut self, corner: Corner) -> Self {
        self.config.corner = corner;
        self
    }

    /// Watermark opacity, 0.0 to 1.0
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.config.opacity = opacity;
        self
    }

    /// Set the HEIC converter (defaults to [`SystemConverter`])
    pub fn converter(mut self, converter: Box<dyn HeicConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Validate the configuration and build the pipeline
    pub fn build(self) -> Result<Pipeline, WatermarkerError> {
        self.config.validate()?;
        Ok(Pipeline {
            config: self.config,
            converter: self
                .converter
                .unwrap_or_else(|| Box::new(SystemConverter::new())),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The watermarking pipeline
pub struct Pipeline {
    config: WatermarkConfig,
    converter: Box<dyn HeicConverter>,
}

/// Outcome of the conversion and watermarking stages
struct Processed {
    outputs: Vec<PathBuf>,
    converted: usize,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &WatermarkConfig {
        &self.config
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<PipelineResult, WatermarkerError> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting.
    ///
    /// Once discovery succeeded, cleanup always runs, even when conversion or
    /// watermarking failed; the stage error is still returned afterwards.
    pub fn run_with_events(
        &self,
        events: &EventSender,
    ) -> Result<PipelineResult, WatermarkerError> {
        let start_time = Instant::now();

        events.send(Event::Pipeline(PipelineEvent::Started));

        // Phase 1: Discovering
        events.phase(PipelinePhase::Discovering);
        let discovery = DirectoryScanner::new()
            .scan_with_events(&self.config.input_dir, events)
            .map_err(|e| fail(events, PipelinePhase::Discovering, e.into()))?;
        let images_found = discovery.total();
        info!(
            input = %self.config.input_dir.display(),
            processable = discovery.processable.len(),
            heic = discovery.pending_conversion.len(),
            "discovery finished"
        );

        // Phases 2 and 3: Converting, Watermarking
        // A failure is reported before cleanup starts.
        let processed = self
            .process(discovery, events)
            .map_err(|(phase, e)| fail(events, phase, e));

        // Phase 4: Cleaning up
        events.phase(PipelinePhase::CleaningUp);
        let cleaned = cleanup::remove_intermediates(&self.config.input_dir, events);

        let (processed, temp_files_removed) = match (processed, cleaned) {
            (Ok(processed), Ok(removed)) => (processed, removed),
            (Ok(_), Err(e)) => return Err(fail(events, PipelinePhase::CleaningUp, e)),
            (Err(e), cleaned) => {
                if let Err(cleanup_error) = cleaned {
                    warn!(error = %cleanup_error, "cleanup after failed run also failed");
                }
                return Err(e);
            }
        };

        let result = PipelineResult {
            outputs: processed.outputs,
            images_found,
            heic_converted: processed.converted,
            temp_files_removed,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: result.summary(),
        }));

        Ok(result)
    }

    fn process(
        &self,
        discovery: Discovery,
        events: &EventSender,
    ) -> Result<Processed, (PipelinePhase, WatermarkerError)> {
        let Discovery {
            mut processable,
            pending_conversion,
        } = discovery;

        let mut converted = 0;
        if !pending_conversion.is_empty() {
            events.phase(PipelinePhase::Converting);
            let intermediates =
                convert::convert_all(&pending_conversion, &*self.converter, events)
                    .map_err(|e| (PipelinePhase::Converting, e))?;
            converted = intermediates.len();
            processable.extend(intermediates);
        }

        events.phase(PipelinePhase::Watermarking);
        let outputs = compositor::watermark_all(&self.config, &processable, events)
            .map_err(|e| (PipelinePhase::Watermarking, e))?;

        Ok(Processed { outputs, converted })
    }
}

fn fail(events: &EventSender, phase: PipelinePhase, error: WatermarkerError) -> WatermarkerError {
    info!(%phase, %error, "run aborted");
    events.send(Event::Pipeline(PipelineEvent::Error {
        phase,
        message: error.to_string(),
    }));
    error
}
