// ============================================================================
// reelcut-core/src/job.rs
// ============================================================================
//
// JOB MODEL: Edit Specs, Transcode Options and Pipeline Jobs
//
// A PipelineJob is what a caller submits: the ordered videos with their edit
// settings, the suggested output path and the transcode options of the final
// mux. The same structures are read from JSON job files.
//
// KEY COMPONENTS:
// - EditSpec: desired transformation of one input video
// - KeptSegment: a time range forced into the trimmed output
// - TranscodeOptions: codec/quality settings of the mux stage
// - PipelineJob: unit of work handed to the orchestrator

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ============================================================================
// KEPT SEGMENTS
// ============================================================================

/// A user-marked region that must survive trimming.
///
/// Segments are passed to the trim tool exactly as entered; overlapping or
/// reversed ranges are the trim tool's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptSegment {
    pub start_secs: u64,
    pub end_secs: u64,
}

impl KeptSegment {
    pub fn new(start_secs: u64, end_secs: u64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// Renders the segment as a single trim tool token, e.g. `5sec,10sec`.
    pub fn token(&self) -> String {
        format!("{}sec,{}sec", self.start_secs, self.end_secs)
    }
}

impl fmt::Display for KeptSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for KeptSegment {
    type Err = CoreError;

    /// Accepts `5-10`, `5,10` and `5sec,10sec`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CoreError::InvalidSpec(format!(
                "kept segment '{s}' must look like START-END, e.g. 5-10"
            ))
        };

        let (start, end) = s.split_once(['-', ',']).ok_or_else(invalid)?;

        let parse = |part: &str| {
            let part = part.trim();
            part.strip_suffix("sec")
                .unwrap_or(part)
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid())
        };

        Ok(Self::new(parse(start)?, parse(end)?))
    }
}

// ============================================================================
// EDIT SPEC
// ============================================================================

/// Description of how one input video should be transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSpec {
    /// Absolute path of the input video
    pub source_path: PathBuf,

    /// When false the video is handed to the mux stage untouched
    #[serde(default = "default_apply_edit")]
    pub apply_edit: bool,

    /// Loudness threshold in percent (0 disables)
    #[serde(default)]
    pub min_audio_percent: u32,

    /// Motion threshold in percent (0 disables)
    #[serde(default)]
    pub min_motion_percent: u32,

    /// Regions always retained, in insertion order
    #[serde(default)]
    pub kept_segments: Vec<KeptSegment>,
}

fn default_apply_edit() -> bool {
    true
}

impl EditSpec {
    /// Creates a spec with editing enabled and no thresholds or segments.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            apply_edit: true,
            min_audio_percent: 0,
            min_motion_percent: 0,
            kept_segments: Vec::new(),
        }
    }

    /// Creates a spec whose video is passed through without trimming.
    pub fn passthrough(source_path: impl Into<PathBuf>) -> Self {
        Self {
            apply_edit: false,
            ..Self::new(source_path)
        }
    }

    pub fn with_min_audio(mut self, percent: u32) -> Self {
        self.min_audio_percent = percent;
        self
    }

    pub fn with_min_motion(mut self, percent: u32) -> Self {
        self.min_motion_percent = percent;
        self
    }

    pub fn with_kept_segment(mut self, start_secs: u64, end_secs: u64) -> Self {
        self.kept_segments.push(KeptSegment::new(start_secs, end_secs));
        self
    }

    /// True when at least one audio/motion threshold is enabled.
    pub fn has_edit_condition(&self) -> bool {
        self.min_audio_percent > 0 || self.min_motion_percent > 0
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidSpec(
                "source path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// TRANSCODE OPTIONS
// ============================================================================

pub const DEFAULT_VIDEO_CODEC: &str = "libx264";
pub const DEFAULT_AUDIO_CODEC: &str = "aac";
pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_CRF: u8 = 23;
pub const DEFAULT_AUDIO_BITRATE_KBPS: u32 = 128;

/// Settings of the final mux stage.
///
/// A dimension whose flag is off is copied through without codec arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscodeOptions {
    pub video_codec: String,
    pub audio_codec: String,
    pub fps: u32,
    pub crf: u8,
    pub audio_bitrate_kbps: u32,
    pub transcode_video: bool,
    pub transcode_audio: bool,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            fps: DEFAULT_FPS,
            crf: DEFAULT_CRF,
            audio_bitrate_kbps: DEFAULT_AUDIO_BITRATE_KBPS,
            transcode_video: false,
            transcode_audio: false,
        }
    }
}

// ============================================================================
// PIPELINE JOB
// ============================================================================

/// Everything the orchestrator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineJob {
    /// Videos in output order
    pub videos: Vec<EditSpec>,

    /// Suggested output path, confirmed by the caller before any work starts
    #[serde(default)]
    pub output_path: PathBuf,

    #[serde(default)]
    pub transcode: TranscodeOptions,
}

impl PipelineJob {
    pub fn new(videos: Vec<EditSpec>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            videos,
            output_path: output_path.into(),
            transcode: TranscodeOptions::default(),
        }
    }

    pub fn with_transcode(mut self, transcode: TranscodeOptions) -> Self {
        self.transcode = transcode;
        self
    }

    /// Number of videos that go through the trim tool.
    pub fn trim_count(&self) -> usize {
        self.videos.iter().filter(|v| v.apply_edit).count()
    }

    /// Parses a job from its JSON representation.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON job file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
