//! # Core Module
//!
//! The UI-agnostic watermarking engine.
//!
//! ## Modules
//! - `config` - The immutable run configuration and corner choice
//! - `naming` - Temporary and output file names
//! - `scanner` - Classifies the files of the input directory
//! - `codec` - Decoding, resizing and encoding rasters
//! - `convert` - HEIC to JPEG conversion
//! - `compositor` - Scales, fades and places the watermark
//! - `cleanup` - Removes temporary conversion files
//! - `pipeline` - Orchestrates the full workflow

pub mod cleanup;
pub mod codec;
pub mod compositor;
pub mod config;
pub mod convert;
pub mod naming;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use compositor::Compositor;
pub use config::{Corner, WatermarkConfig};
pub use convert::{HeicConverter, SystemConverter};
pub use scanner::{Discovery, ImageKind};
