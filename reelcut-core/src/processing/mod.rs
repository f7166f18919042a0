//! Pipeline orchestration.
//!
//! This module drives a job through its external tool invocations and owns
//! the intermediate files created along the way.

/// Stage sequencing and the public `Pipeline` type
pub mod pipeline;

/// Intermediate file tracking and cleanup
pub mod artifacts;

pub use artifacts::IntermediateArtifacts;
pub use pipeline::{Pipeline, PipelineOutcome, PipelineState, ProcessSummary, SUCCESS_MESSAGE};
