// reelcut-cli/src/config.rs
//
// Default values for the `reelcut` command line.

/// Loudness threshold used when `--min-audio` is not given (disabled).
pub const DEFAULT_MIN_AUDIO: u32 = 0;

/// Motion threshold used when `--min-motion` is not given (disabled).
pub const DEFAULT_MIN_MOTION: u32 = 0;

/// Flag each tool accepts to print its version, used by `reelcut check`.
pub const TRIM_TOOL_VERSION_ARG: &str = "--version";
pub const MUX_TOOL_VERSION_ARG: &str = "-version";
pub const PROBE_TOOL_VERSION_ARG: &str = "-version";
