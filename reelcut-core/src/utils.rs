//! Formatting helpers and output naming.

use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::job::EditSpec;

/// Builds the filename suggested for a job's output.
///
/// A single video keeps its own name (`clip.mov` becomes
/// `clip_processed.mov`); a batch is named after the time it was started.
pub fn default_output_filename<Tz>(videos: &[EditSpec], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let [only] = videos {
        let source = only.source_path.as_path();
        if let Some(stem) = file_stem(source) {
            let extension = source
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or(crate::config::DEFAULT_EXTENSION);
            return format!("{stem}_processed.{extension}");
        }
    }

    format!("{}_processed.mp4", now.format("%Y_%m_%d_%H_%M_%S"))
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
}

/// Formats seconds as `HH:MM:SS`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
