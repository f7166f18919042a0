//! Core library for batching video clips through a trim tool and joining
//! the results with a mux tool.
//!
//! Each video of a job is optionally trimmed by `auto-editor` (removing quiet
//! or still segments while keeping marked ranges), then all intermediates are
//! concatenated and optionally transcoded by `ffmpeg`. Progress from both
//! tools is normalised into [`StatusUpdate`]s and intermediate files are
//! always removed.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use reelcut_core::{
//!     CoreConfig, EditSpec, FfprobeDurationProbe, Pipeline, PipelineJob, PipelineOutcome,
//!     StdFileSystem, SystemProcessRunner,
//! };
//!
//! let config = CoreConfig::default();
//! let job = PipelineJob::new(
//!     vec![
//!         EditSpec::new("/videos/intro.mp4").with_min_audio(4).with_kept_segment(0, 5),
//!         EditSpec::passthrough("/videos/outro.mp4"),
//!     ],
//!     "/videos/joined.mp4",
//! );
//!
//! let runner = SystemProcessRunner::new();
//! let probe = FfprobeDurationProbe::new(&config.probe_tool);
//! let fs = StdFileSystem;
//! let mut pipeline = Pipeline::new(&config, &runner, &probe, &fs);
//!
//! let outcome = pipeline
//!     .process(&job, |suggested| Some(suggested.to_path_buf()), |update| {
//!         if update.visible {
//!             println!("{:>3}% {}", update.overall_percent, update.message);
//!         }
//!     })
//!     .unwrap();
//!
//! if let PipelineOutcome::Completed(summary) = outcome {
//!     println!("Wrote {}", summary.output_path.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod job;
pub mod processing;
pub mod progress_reporting;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use external::{
    DurationProbe, ExitOutcome, FfprobeDurationProbe, FileSystem, ProcessRunner, StdFileSystem,
    SystemProcessRunner, build_mux_command, build_trim_command, check_dependency,
};
pub use job::{EditSpec, KeptSegment, PipelineJob, TranscodeOptions};
pub use processing::{Pipeline, PipelineOutcome, PipelineState, ProcessSummary};
pub use progress_reporting::{
    LineClass, ProgressAggregator, ProgressEvent, StageInfo, StageKind, StatusUpdate,
    classify_line,
};
pub use temp_files::create_temp_file_path;
pub use utils::{default_output_filename, format_duration};
