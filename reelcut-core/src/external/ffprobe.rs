//! Duration probing through ffprobe.
//!
//! The probe is launched as
//! `<probe> -v error -show_entries format=duration -of default=noprint_wrappers=1:nokey=1 <path>`
//! and its stdout is read as a plain number of seconds.
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::DEFAULT_PROBE_TOOL;
use crate::error::{CoreResult, command_start_error, probe_error};
use crate::external::DurationProbe;

/// [`DurationProbe`] that shells out to an ffprobe-compatible program.
#[derive(Debug, Clone)]
pub struct FfprobeDurationProbe {
    program: String,
}

impl Default for FfprobeDurationProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TOOL)
    }
}

impl FfprobeDurationProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "format=duration".to_string(),
            "-of".to_string(),
            "default=noprint_wrappers=1:nokey=1".to_string(),
            path.to_string_lossy().into_owned(),
        ]
    }
}

impl DurationProbe for FfprobeDurationProbe {
    fn duration_secs(&self, path: &Path) -> CoreResult<f64> {
        log::debug!("Probing duration of {}", path.display());

        let output = Command::new(&self.program)
            .args(Self::args(path))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_start_error(self.program.as_str(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {:?}", self.program, output.status.code()),
                text => text.to_string(),
            };
            log::error!("Duration probe failed for {}: {}", path.display(), message);
            return Err(probe_error(path, message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let secs = parse_duration_output(&stdout).map_err(|message| probe_error(path, message))?;
        log::debug!("Duration of {}: {:.2}s", path.display(), secs);
        Ok(secs)
    }
}

/// Parses probe stdout into seconds.
///
/// The first non-empty line must be a finite, non-negative number.
pub fn parse_duration_output(stdout: &str) -> Result<f64, String> {
    let value = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| "probe printed no duration".to_string())?;

    match value.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs),
        _ => Err(format!("'{value}' is not a valid duration")),
    }
}
