//! Terminal rendering of pipeline events.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use photo_watermarker::events::{
    CleanupEvent, ConvertEvent, Event, PipelineEvent, PipelinePhase, ScanEvent, StageProgress,
    WatermarkEvent,
};
use std::time::Duration;

/// Turns events into one spinner or progress bar per stage
pub struct ProgressUi {
    active: Option<ProgressBar>,
    verbose: bool,
}

impl ProgressUi {
    pub fn new(verbose: bool) -> Self {
        Self {
            active: None,
            verbose,
        }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Scan(ScanEvent::Started { .. }) => self.spinner("Finding images..."),
            Event::Scan(ScanEvent::Completed {
                processable,
                pending_conversion,
            }) => self.succeed(format!("Found {} images", processable + pending_conversion)),

            Event::Convert(ConvertEvent::Started { total }) => self.bar("Converting HEIC", total),
            Event::Convert(ConvertEvent::Progress(progress)) => self.advance(&progress),
            Event::Convert(ConvertEvent::Completed { .. }) => {
                self.succeed("HEIC images processed successfully".to_string())
            }

            Event::Watermark(WatermarkEvent::Started { total }) => {
                self.bar("Processing images", total)
            }
            Event::Watermark(WatermarkEvent::Progress(progress)) => self.advance(&progress),
            Event::Watermark(WatermarkEvent::Completed { .. }) => {
                self.succeed("All images processed successfully".to_string())
            }

            Event::Cleanup(CleanupEvent::Started { .. }) => {
                self.spinner("Cleaning up temporary files...")
            }
            Event::Cleanup(CleanupEvent::Completed { .. }) => {
                self.succeed("Temporary files removed.".to_string())
            }

            Event::Pipeline(PipelineEvent::Error { phase, .. }) => self.fail(phase),
            _ => {}
        }
    }

    fn spinner(&mut self, message: &'static str) {
        self.finish_active();
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(80));
        self.active = Some(pb);
    }

    fn bar(&mut self, label: &'static str, total: usize) {
        self.finish_active();
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{prefix} |{bar:40.cyan}| {percent}% || {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█░"),
        );
        pb.set_prefix(label);
        self.active = Some(pb);
    }

    fn advance(&mut self, progress: &StageProgress) {
        if let Some(pb) = &self.active {
            pb.set_position(progress.completed as u64);
            if self.verbose {
                pb.set_message(
                    progress
                        .current_path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
    }

    fn succeed(&mut self, message: String) {
        if let Some(pb) = self.active.take() {
            pb.set_style(finished_style());
            pb.set_prefix(style("✔").green().bold().to_string());
            pb.finish_with_message(message);
        }
    }

    fn fail(&mut self, phase: PipelinePhase) {
        let message = format!("{} failed", phase);
        match self.active.take() {
            Some(pb) => {
                pb.set_style(finished_style());
                pb.set_prefix(style("✖").red().bold().to_string());
                pb.abandon_with_message(message);
            }
            None => eprintln!("{} {}", style("✖").red().bold(), message),
        }
    }

    fn finish_active(&mut self) {
        if let Some(pb) = self.active.take() {
            pb.finish_and_clear();
        }
    }
}

fn finished_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
