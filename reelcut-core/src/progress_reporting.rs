//! Progress reporting for pipeline runs
//!
//! The trim tool and the mux tool report progress in unrelated text formats.
//! [`parser`] classifies raw output lines, [`aggregator`] turns the
//! classifications of one running stage into [`StatusUpdate`]s for the caller.
//!
//! Every update carries the percent of the current stage and an overall
//! percent in which every stage of the run has the same weight.

pub mod aggregator;
pub mod parser;

pub use aggregator::ProgressAggregator;
pub use parser::{LineClass, classify_line};

/// Which external tool a stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Trim,
    Mux,
}

impl StageKind {
    /// True when `class` belongs to this tool's progress vocabulary.
    ///
    /// Trim stages only report discrete progress, the mux stage only reports
    /// elapsed time, so a line of the other vocabulary is treated as noise.
    pub fn accepts(&self, class: &LineClass) -> bool {
        matches!(
            (self, class),
            (StageKind::Trim, LineClass::DiscreteStage { .. })
                | (StageKind::Mux, LineClass::TimeBased { .. })
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageKind::Trim => "trim",
            StageKind::Mux => "mux",
        }
    }
}

/// Position of a stage within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    /// Zero-based index among all stages of the run
    pub index: usize,
    /// Total number of stages (trims plus the final mux)
    pub count: usize,
    pub kind: StageKind,
}

impl StageInfo {
    pub fn new(index: usize, count: usize, kind: StageKind) -> Self {
        Self { index, count, kind }
    }

    /// Overall completion in percent once this stage is `fraction` done.
    pub fn overall_percent(&self, fraction: f64) -> u8 {
        if self.count == 0 {
            return 0;
        }
        percent_of((self.index as f64 + fraction.clamp(0.0, 1.0)) / self.count as f64)
    }
}

/// One recognized progress observation, consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub stage: StageInfo,
    /// Completion of the stage in `[0, 1]`
    pub fraction: f64,
    pub message: String,
}

/// What the caller is told about progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub message: String,
    /// Percent of the current stage, `0..=100`
    pub percent: u8,
    /// False while no recognizable progress is being reported
    pub visible: bool,
    /// Stage the update belongs to; `None` for the final update of a run
    pub stage: Option<StageInfo>,
    /// Equally weighted percent across all stages, `0..=100`
    pub overall_percent: u8,
}

impl StatusUpdate {
    /// Hidden update announcing that a run has finished.
    pub fn finished(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            percent: 100,
            visible: false,
            stage: None,
            overall_percent: 100,
        }
    }
}

/// Converts a fraction to a whole percent, rounded and clamped to `0..=100`.
pub fn percent_of(fraction: f64) -> u8 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
