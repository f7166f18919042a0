// ============================================================================
// reelcut-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Pipeline
//
// Every failure of a pipeline run maps to exactly one CoreError variant. The
// orchestrator always runs cleanup before an error reaches the caller, and no
// variant is retried automatically.
//
// KEY COMPONENTS:
// - CoreError: the error enum shared by the core and the CLI
// - CoreResult: result alias
// - Helper constructors for process related failures

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An edit spec is malformed (empty or missing source path).
    #[error("Invalid edit spec: {0}")]
    InvalidSpec(String),

    /// The job contains no videos.
    #[error("No videos to process")]
    EmptyBatch,

    /// The mux stage received no inputs.
    #[error("No inputs were passed to the mux stage")]
    EmptyJob,

    /// An external tool could not be started.
    #[error("Failed to launch '{tool}': {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// An external tool exited with a non-zero status.
    #[error("'{tool}' failed with {}", describe_exit_code(.code))]
    ToolFailed { tool: String, code: Option<i32> },

    /// The duration probe failed or printed something that is not a duration.
    #[error("Failed to probe duration of '{}': {message}", .path.display())]
    Probe { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid job file: {0}")]
    JobFile(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for reelcut operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Short hint shown below the error message.
    ///
    /// A tool that cannot be started and a tool that ran and failed need
    /// different advice, so the two are kept apart here.
    #[must_use]
    pub fn guidance(&self) -> Option<String> {
        match self {
            CoreError::Launch { tool, .. } => Some(format!(
                "Make sure '{tool}' is installed and available on your PATH, or point reelcut at it explicitly."
            )),
            CoreError::ToolFailed { tool, .. } => Some(format!(
                "'{tool}' reported an error; run with --verbose to see its output."
            )),
            CoreError::Probe { .. } => {
                Some("Check that the intermediate file is a valid media file.".to_string())
            }
            CoreError::EmptyBatch => Some("Add at least one video to the job.".to_string()),
            _ => None,
        }
    }
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}

/// Builds a [`CoreError::Launch`] for a program that failed to spawn.
pub fn command_start_error(tool: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::Launch {
        tool: tool.into(),
        source,
    }
}

/// Builds a [`CoreError::ToolFailed`] for a program that exited unsuccessfully.
pub fn command_failed_error(tool: impl Into<String>, code: Option<i32>) -> CoreError {
    CoreError::ToolFailed {
        tool: tool.into(),
        code,
    }
}

/// Builds a [`CoreError::Probe`].
pub fn probe_error(path: impl Into<PathBuf>, message: impl Into<String>) -> CoreError {
    CoreError::Probe {
        path: path.into(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failed_message_includes_exit_code() {
        let err = command_failed_error("auto-editor", Some(2));
        assert_eq!(err.to_string(), "'auto-editor' failed with exit code 2");

        let err = command_failed_error("ffmpeg", None);
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn launch_and_failure_give_different_guidance() {
        let launch = command_start_error(
            "ffmpeg",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let failed = command_failed_error("ffmpeg", Some(1));

        let launch_hint = launch.guidance().unwrap();
        let failed_hint = failed.guidance().unwrap();
        assert!(launch_hint.contains("installed"));
        assert!(failed_hint.contains("--verbose"));
        assert_ne!(launch_hint, failed_hint);
    }
}
