//! # Photo Watermarker
//!
//! Stamps a watermark image onto every photo in a folder.
//!
//! ## Workflow
//! - **Discover** - PNG and JPEG files are processed directly, HEIC files are queued
//! - **Convert** - HEIC files become temporary JPEGs next to the originals
//! - **Watermark** - the mark is scaled, faded and composited into one corner
//! - **Clean up** - temporary JPEGs are removed again
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and presentation layers:
//! - `core` - Discovery, conversion, compositing and cleanup
//! - `events` - Event-driven progress reporting
//! - `error` - Error types
//! - `cli` - Command-line interface (binary only)

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, WatermarkerError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. `default_filter`
/// is used when `RUST_LOG` is not set.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
