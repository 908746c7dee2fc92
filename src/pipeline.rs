// src/pipeline.rs
//! Pipeline capability traits for the two stages of the CLI: load, then deliver.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::api::LoadOutcome;
use crate::error::AppError;
use crate::output::OutputReport;

/// Produces documents from a content source.
pub trait DocumentSource {
    fn load(&self) -> Result<LoadOutcome, AppError>;
}

/// Delivers rendered documents to their destinations.
pub trait DocumentDelivery {
    fn deliver(&self, rendered: String) -> Result<OutputReport, AppError>;
}
