//! # Error Module
//!
//! Error types for the photo watermarker.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Fail fast** - every error aborts the run; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum WatermarkerError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error("HEIC conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corner selection failed: {0}")]
    Selection(String),
}

/// Errors that occur while reading the input directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while loading or resizing an image
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("Image is empty or corrupted: {path}")]
    EmptyImage { path: PathBuf },

    #[error("Resize failed: {reason}")]
    Resize { reason: String },
}

/// Errors that occur while turning HEIC files into JPEG
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read HEIC file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion tool `{tool}` could not be started: {source}. Is it installed?")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion tool `{tool}` failed: {stderr}")]
    ToolFailed { tool: String, stderr: String },

    #[error("Failed to prepare scratch files for conversion: {source}")]
    Scratch {
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion produced no output: {reason}")]
    MissingOutput { reason: String },
}

/// Errors that occur while writing or removing files
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("Failed to remove temporary file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, WatermarkerError>;
