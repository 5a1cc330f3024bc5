//! # CLI Module
//!
//! Command-line interface for the photo watermarker.
//!
//! ## Usage
//! ```bash
//! # Watermark images/ into output/ with watermark.png
//! watermarker
//!
//! # Custom folders and watermark
//! watermarker -i ~/Photos/trip -o ~/Photos/trip-marked -w logo.png
//!
//! # Fainter mark, machine-readable summary
//! watermarker --opacity 0.4 --report json
//! ```
//!
//! The corner is always chosen from a menu after start-up.

mod progress;
mod prompt;

use clap::{Parser, ValueEnum};
use console::{style, Term};
use photo_watermarker::core::config::{
    DEFAULT_INPUT_DIR, DEFAULT_OPACITY, DEFAULT_OUTPUT_DIR, DEFAULT_WATERMARK,
};
use photo_watermarker::core::pipeline::{Pipeline, PipelineResult};
use photo_watermarker::core::WatermarkConfig;
use photo_watermarker::error::Result;
use photo_watermarker::events::EventChannel;
use progress::ProgressUi;
use std::path::PathBuf;

/// Watermarker - stamp a logo onto a folder of photos
#[derive(Parser, Debug)]
#[command(name = "watermarker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input folder with images
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Output folder for watermarked images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Watermark image (PNG with transparency works best)
    #[arg(short, long, default_value = DEFAULT_WATERMARK)]
    watermark: PathBuf,

    /// Watermark opacity (0.0 = invisible, 1.0 = as is)
    #[arg(long, default_value_t = DEFAULT_OPACITY, value_parser = parse_opacity)]
    opacity: f32,

    /// Summary format
    #[arg(long, default_value = "pretty")]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable summary with colors
    Pretty,
    /// JSON summary for scripting
    Json,
}

fn parse_opacity(value: &str) -> std::result::Result<f32, String> {
    let opacity: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(format!("{} is outside 0.0..=1.0", opacity))
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    photo_watermarker::init_tracing(if cli.verbose { "debug" } else { "warn" });

    let term = Term::stderr();
    print_header(&term);

    let corner = prompt::select_corner(&term)?;

    let pipeline = Pipeline::builder()
        .input_dir(cli.input)
        .output_dir(cli.output)
        .watermark(cli.watermark)
        .corner(corner)
        .opacity(cli.opacity)
        .build()?;

    let (sender, receiver) = EventChannel::new();

    let mut ui = ProgressUi::new(cli.verbose);
    let event_thread = receiver.spawn_consumer(move |event| ui.handle(event));

    let result = pipeline.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    let result = result?;

    match cli.report {
        ReportFormat::Pretty => print_pretty_results(&term, &result, pipeline.config(), cli.verbose),
        ReportFormat::Json => print_json_results(&result, pipeline.config()),
    }

    Ok(())
}

fn print_header(term: &Term) {
    let rule = style(format!("-[{}]-", "-".repeat(60))).white().bold();
    term.write_line(&rule.to_string()).ok();
    term.write_line(&format!(
        "  {} {}",
        style("Watermarker").bold().magenta(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    ))
    .ok();
    term.write_line(&rule.to_string()).ok();
}

fn print_pretty_results(
    term: &Term,
    result: &PipelineResult,
    config: &WatermarkConfig,
    verbose: bool,
) {
    term.write_line("").ok();
    term.write_line(&format!(
        "{} Watermarking Complete",
        style("✓").green().bold()
    ))
    .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} images found in {:.1}s",
        style(result.images_found).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();

    if result.heic_converted > 0 {
        term.write_line(&format!(
            "  {} HEIC photos converted",
            style(result.heic_converted).cyan()
        ))
        .ok();
    }

    term.write_line(&format!(
        "  {} images written to {}",
        style(result.outputs.len()).cyan(),
        style(config.output_dir.display()).yellow()
    ))
    .ok();

    if result.temp_files_removed > 0 {
        term.write_line(&format!(
            "  {} temporary files removed",
            style(result.temp_files_removed).dim()
        ))
        .ok();
    }

    if verbose {
        term.write_line("").ok();
        for output in &result.outputs {
            term.write_line(&format!("    {} {}", style("○").dim(), output.display()))
                .ok();
        }
    }
}

fn print_json_results(result: &PipelineResult, config: &WatermarkConfig) {
    let output = serde_json::json!({
        "summary": result.summary(),
        "corner": config.corner,
        "opacity": config.opacity,
        "outputs": result.outputs,
    });

    println!("{:#}", output);
}
