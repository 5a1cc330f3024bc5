//! # watermarker CLI
//!
//! Command-line interface for the photo watermarker.
//!
//! ## Usage
//! ```bash
//! watermarker --input ~/Photos/trip --output ~/Photos/trip-marked
//! watermarker -w logo.png --opacity 0.5 --report json
//! ```

mod cli;

use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
