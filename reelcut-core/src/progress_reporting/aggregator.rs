//! Per-stage progress state.
//!
//! One aggregator follows one running external command. It is reset (or
//! recreated) whenever a new command is launched, so trim and mux output are
//! never mixed.

use super::parser::classify_line;
use super::{ProgressEvent, StageInfo, StatusUpdate, percent_of};

#[derive(Debug, Clone)]
pub struct ProgressAggregator {
    stage: StageInfo,
    total_duration_secs: f64,
    fraction: f64,
    visible: bool,
    message: String,
    percent: u8,
}

impl ProgressAggregator {
    /// Starts tracking `stage`. `total_duration_secs` is only used by the mux
    /// stage and may be 0 for trims.
    pub fn new(stage: StageInfo, total_duration_secs: f64) -> Self {
        Self {
            stage,
            total_duration_secs,
            fraction: 0.0,
            visible: false,
            message: String::new(),
            percent: 0,
        }
    }

    /// Forgets all state and starts tracking a new stage.
    pub fn reset(&mut self, stage: StageInfo, total_duration_secs: f64) {
        *self = Self::new(stage, total_duration_secs);
    }

    /// Classifies one output line and returns the update it causes, if any.
    pub fn observe_line(&mut self, line: &str) -> Option<StatusUpdate> {
        let class = classify_line(line, self.total_duration_secs);
        if !self.stage.kind.accepts(&class) {
            return self.mark_idle();
        }

        match (class.fraction(), class.message()) {
            (Some(fraction), Some(message)) => {
                let event = ProgressEvent {
                    stage: self.stage,
                    fraction,
                    message: message.to_string(),
                };
                Some(self.apply(event))
            }
            _ => self.mark_idle(),
        }
    }

    /// Records a recognized event; the result is always visible.
    pub fn apply(&mut self, event: ProgressEvent) -> StatusUpdate {
        self.stage = event.stage;
        self.fraction = event.fraction.clamp(0.0, 1.0);
        self.percent = percent_of(self.fraction);
        self.message = event.message;
        self.visible = true;
        self.snapshot()
    }

    /// Hides progress after a line without usable progress.
    ///
    /// Only the transition from visible to hidden produces an update.
    pub fn mark_idle(&mut self) -> Option<StatusUpdate> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(self.snapshot())
    }

    pub fn stage(&self) -> StageInfo {
        self.stage
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn snapshot(&self) -> StatusUpdate {
        StatusUpdate {
            message: self.message.clone(),
            percent: self.percent,
            visible: self.visible,
            stage: Some(self.stage),
            overall_percent: self.stage.overall_percent(self.fraction),
        }
    }
}
