// ============================================================================
// reelcut-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Process Launching, Duration Probing and File System Access
//
// The orchestrator talks to the outside world only through the three traits
// defined here, so tests can swap every external effect for a mock.
//
// KEY COMPONENTS:
// - ProcessRunner: launches a tool and streams its output lines
// - DurationProbe: reads the duration of a media file
// - FileSystem: temp path allocation, existence checks and deletion
// - Argument builders for the trim and mux tools
// - Dependency checking

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{CoreResult, command_start_error};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Trim tool argument building
pub mod auto_editor;

/// Mux tool argument building
pub mod ffmpeg;

/// Duration probing through ffprobe
pub mod ffprobe;

/// Process launching with merged output streaming
pub mod runner;

pub use auto_editor::{build_trim_command, edit_condition};
pub use ffmpeg::{build_mux_command, concat_filter_graph};
pub use ffprobe::{FfprobeDurationProbe, parse_duration_output};
pub use runner::SystemProcessRunner;

// ============================================================================
// PROCESS EXECUTION
// ============================================================================

/// How a launched tool finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches an external program and reports its output line by line.
///
/// `argv[0]` is the program, the rest are its arguments. Implementations call
/// `on_line` once per non-empty output line, on the calling thread, and return
/// only after the process has exited. A program that cannot be started is a
/// [`CoreError::Launch`](crate::CoreError::Launch); a non-zero exit is not an
/// error at this level.
pub trait ProcessRunner {
    fn run(&self, argv: &[String], on_line: &mut dyn FnMut(&str)) -> CoreResult<ExitOutcome>;
}

// ============================================================================
// DURATION PROBING
// ============================================================================

/// Reads the duration of a media file in seconds.
pub trait DurationProbe {
    fn duration_secs(&self, path: &Path) -> CoreResult<f64>;
}

// ============================================================================
// FILE SYSTEM ACCESS
// ============================================================================

/// File system operations the pipeline performs.
pub trait FileSystem {
    /// Returns a fresh, collision-free path in `dir` with the given extension.
    fn unique_temp_path(&self, dir: &Path, extension: &str) -> PathBuf;

    fn exists(&self, path: &Path) -> bool;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn unique_temp_path(&self, dir: &Path, extension: &str) -> PathBuf {
        crate::temp_files::create_temp_file_path(dir, extension)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `program` can be launched by running it with `version_arg`.
///
/// Only the ability to start the program matters; its exit status is ignored
/// because some tools print their version and exit non-zero.
pub fn check_dependency(program: &str, version_arg: &str) -> CoreResult<()> {
    let status = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(_) => {
            log::debug!("Found dependency: {}", program);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", program);
            } else {
                log::error!("Failed to start dependency check for '{}': {}", program, e);
            }
            Err(command_start_error(program, e))
        }
    }
}
