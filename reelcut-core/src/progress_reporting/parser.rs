//! Classification of raw tool output lines.
//!
//! Two formats are understood:
//!
//! - the trim tool's machine progress, `<label>~<current>~<total>[~...]`,
//!   for a small set of known phase labels
//! - the mux tool's status line, `frame=... fps=... time=HH:MM:SS.ff ...`
//!
//! Everything else, including unknown phase labels, is `Unrecognized`.

use std::sync::LazyLock;

use regex::Regex;

/// Phase labels of the trim tool that carry discrete progress.
pub const DISCRETE_LABELS: [&str; 3] =
    ["creating new video", "creating new audio", "analyzing motion"];

/// Number of characters of a mux status line kept as the status message.
pub const STATUS_MESSAGE_CHARS: usize = 60;

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"time=(\d{2}):(\d{2}):(\d{2})\.(\d{2})").expect("time regex is valid")
});

/// Classification of a single output line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// `current` of `total` units of a trim phase are done
    DiscreteStage {
        label: String,
        current: u64,
        total: u64,
    },
    /// The mux tool has written `elapsed_secs` of a `total_secs` output
    TimeBased {
        elapsed_secs: u64,
        total_secs: f64,
        status: String,
    },
    Unrecognized,
}

impl LineClass {
    /// Completion in `[0, 1]`, or `None` for unrecognized lines.
    pub fn fraction(&self) -> Option<f64> {
        match self {
            LineClass::DiscreteStage { current, total, .. } => {
                Some((*current as f64 / *total as f64).clamp(0.0, 1.0))
            }
            LineClass::TimeBased {
                elapsed_secs,
                total_secs,
                ..
            } => Some((*elapsed_secs as f64 / total_secs).clamp(0.0, 1.0)),
            LineClass::Unrecognized => None,
        }
    }

    /// Status message to show for this line.
    pub fn message(&self) -> Option<&str> {
        match self {
            LineClass::DiscreteStage { label, .. } => Some(label),
            LineClass::TimeBased { status, .. } => Some(status),
            LineClass::Unrecognized => None,
        }
    }
}

/// Classifies `line`. Pure; never fails.
///
/// `total_duration_secs` converts mux time stamps into a fraction; when it is
/// not a positive number, time-based lines are `Unrecognized`.
pub fn classify_line(line: &str, total_duration_secs: f64) -> LineClass {
    if let Some(class) = classify_discrete(line) {
        return class;
    }
    if let Some(class) = classify_time_based(line, total_duration_secs) {
        return class;
    }
    LineClass::Unrecognized
}

fn classify_discrete(line: &str) -> Option<LineClass> {
    let mut parts = line.split('~');
    let head = parts.next()?;
    let lowered = head.to_lowercase();
    if !DISCRETE_LABELS.iter().any(|label| lowered.contains(label)) {
        return None;
    }

    let current = parts.next()?.trim().parse::<u64>().ok()?;
    let total = parts.next()?.trim().parse::<u64>().ok()?;
    if total == 0 {
        return None;
    }

    Some(LineClass::DiscreteStage {
        label: head.trim().to_string(),
        current,
        total,
    })
}

fn classify_time_based(line: &str, total_duration_secs: f64) -> Option<LineClass> {
    if !(total_duration_secs.is_finite() && total_duration_secs > 0.0) {
        return None;
    }
    if !(line.contains("frame=") && line.contains("fps=")) {
        return None;
    }

    let caps = TIME_REGEX.captures(line)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
    let elapsed_secs = field(1)? * 3600 + field(2)? * 60 + field(3)?;

    Some(LineClass::TimeBased {
        elapsed_secs,
        total_secs: total_duration_secs,
        status: line.chars().take(STATUS_MESSAGE_CHARS).collect(),
    })
}
