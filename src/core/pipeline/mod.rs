//! # Pipeline Module
//!
//! Orchestrates the full watermarking workflow.
//!
//! ## Pipeline Stages
//! 1. **Discover** - Classify the files of the input directory
//! 2. **Convert** - Turn HEIC files into temporary JPEGs (only if there are any)
//! 3. **Watermark** - Composite and write every image
//! 4. **Clean up** - Delete the temporary JPEGs
//!
//! Stages and files run strictly one after another on the calling thread.

mod executor;

pub use executor::{Pipeline, PipelineBuilder, PipelineResult};
