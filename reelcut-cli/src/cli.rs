// reelcut-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reelcut_core::config::{DEFAULT_MUX_TOOL, DEFAULT_PROBE_TOOL, DEFAULT_TRIM_TOOL};
use reelcut_core::job::{
    DEFAULT_AUDIO_BITRATE_KBPS, DEFAULT_AUDIO_CODEC, DEFAULT_CRF, DEFAULT_FPS, DEFAULT_VIDEO_CODEC,
};
use reelcut_core::{CoreConfig, KeptSegment, TranscodeOptions};

use crate::config::{DEFAULT_MIN_AUDIO, DEFAULT_MIN_MOTION};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Reelcut: trim quiet and still parts out of clips and join them",
    long_about = "Trims each video with auto-editor, then concatenates (and optionally transcodes) the results with ffmpeg."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging, including every launched command
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trims and joins videos into a single output file
    Process(ProcessArgs),
    /// Checks that the external tools can be launched
    Check(ToolArgs),
}

/// Locations of the external tools.
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// Trim tool executable
    #[arg(long, value_name = "PROGRAM", env = "REELCUT_TRIM_TOOL",
          default_value = DEFAULT_TRIM_TOOL)]
    pub trim_tool: String,

    /// Mux/transcode tool executable
    #[arg(long, value_name = "PROGRAM", env = "REELCUT_MUX_TOOL",
          default_value = DEFAULT_MUX_TOOL)]
    pub mux_tool: String,

    /// Duration probe executable
    #[arg(long, value_name = "PROGRAM", env = "REELCUT_PROBE_TOOL",
          default_value = DEFAULT_PROBE_TOOL)]
    pub probe_tool: String,
}

impl ToolArgs {
    pub fn to_core_config(&self) -> CoreConfig {
        CoreConfig::default()
            .with_trim_tool(&self.trim_tool)
            .with_mux_tool(&self.mux_tool)
            .with_probe_tool(&self.probe_tool)
    }
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Videos to process, in output order
    #[arg(value_name = "VIDEOS")]
    pub videos: Vec<PathBuf>,

    /// JSON job file; its videos come before any listed on the command line
    #[arg(long, value_name = "FILE")]
    pub job: Option<PathBuf>,

    /// Output file (defaults to a name derived from the inputs)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for the output file (defaults to the current directory)
    #[arg(long, value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    // --- Edit Settings (apply to the videos listed on the command line) ---
    /// Pass the listed videos through without trimming
    #[arg(long)]
    pub no_edit: bool,

    /// Keep segments louder than this percentage (0 disables)
    #[arg(long, value_name = "PERCENT", default_value_t = DEFAULT_MIN_AUDIO,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_audio: u32,

    /// Keep segments with more motion than this percentage (0 disables)
    #[arg(long, value_name = "PERCENT", default_value_t = DEFAULT_MIN_MOTION,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_motion: u32,

    /// Always keep this range in seconds, e.g. 5-10 (repeatable)
    #[arg(long = "keep", value_name = "START-END")]
    pub keep: Vec<KeptSegment>,

    // --- Transcode Settings ---
    /// Re-encode the video stream
    #[arg(long)]
    pub transcode_video: bool,

    #[arg(long, value_name = "CODEC", default_value = DEFAULT_VIDEO_CODEC)]
    pub video_codec: String,

    /// Constant rate factor for the video encoder
    #[arg(long, value_name = "CRF", default_value_t = DEFAULT_CRF,
          value_parser = clap::value_parser!(u8).range(0..=63))]
    pub crf: u8,

    /// Output frame rate
    #[arg(long, value_name = "FPS", default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Re-encode the audio stream
    #[arg(long)]
    pub transcode_audio: bool,

    #[arg(long, value_name = "CODEC", default_value = DEFAULT_AUDIO_CODEC)]
    pub audio_codec: String,

    /// Audio bitrate in kbit/s
    #[arg(long, value_name = "KBPS", default_value_t = DEFAULT_AUDIO_BITRATE_KBPS)]
    pub audio_bitrate: u32,

    // --- Interaction ---
    /// Accept the suggested output path without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Open the output folder when done
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub tools: ToolArgs,
}

impl ProcessArgs {
    /// True when any transcode flag was given.
    pub fn requests_transcode(&self) -> bool {
        self.transcode_video || self.transcode_audio
    }

    pub fn transcode_options(&self) -> TranscodeOptions {
        TranscodeOptions {
            video_codec: self.video_codec.clone(),
            audio_codec: self.audio_codec.clone(),
            fps: self.fps,
            crf: self.crf,
            audio_bitrate_kbps: self.audio_bitrate,
            transcode_video: self.transcode_video,
            transcode_audio: self.transcode_audio,
        }
    }
}
