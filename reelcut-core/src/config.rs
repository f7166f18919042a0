// ============================================================================
// reelcut-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Tool Locations and Defaults
//
// The pipeline never reads global settings. Everything that varies between
// installations (which executables to launch, which extension to give
// intermediate files when the output has none) is carried by CoreConfig and
// passed in by the caller.

use crate::error::{CoreError, CoreResult};

/// Default trim tool executable.
pub const DEFAULT_TRIM_TOOL: &str = "auto-editor";

/// Default mux/transcode tool executable.
pub const DEFAULT_MUX_TOOL: &str = "ffmpeg";

/// Default duration probe executable.
pub const DEFAULT_PROBE_TOOL: &str = "ffprobe";

/// Extension used for intermediates when the confirmed output path has none.
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Main configuration structure for the reelcut-core library.
///
/// # Examples
///
/// ```rust
/// use reelcut_core::CoreConfig;
///
/// let config = CoreConfig::default().with_trim_tool("/opt/auto-editor/bin/auto-editor");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mux_tool, "ffmpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Executable used for the per-video trim stage
    pub trim_tool: String,

    /// Executable used for the final concatenation/transcode stage
    pub mux_tool: String,

    /// Executable used to query media durations
    pub probe_tool: String,

    /// Fallback extension for intermediate files
    pub default_extension: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            trim_tool: DEFAULT_TRIM_TOOL.to_string(),
            mux_tool: DEFAULT_MUX_TOOL.to_string(),
            probe_tool: DEFAULT_PROBE_TOOL.to_string(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn with_trim_tool(mut self, tool: impl Into<String>) -> Self {
        self.trim_tool = tool.into();
        self
    }

    pub fn with_mux_tool(mut self, tool: impl Into<String>) -> Self {
        self.mux_tool = tool.into();
        self
    }

    pub fn with_probe_tool(mut self, tool: impl Into<String>) -> Self {
        self.probe_tool = tool.into();
        self
    }

    /// Checks that every tool name and the fallback extension are usable.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("trim tool", &self.trim_tool),
            ("mux tool", &self.mux_tool),
            ("probe tool", &self.probe_tool),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{name} must not be empty")));
            }
        }

        if self.default_extension.is_empty() || self.default_extension.contains(['.', '/', '\\']) {
            return Err(CoreError::Config(format!(
                "default extension '{}' must be a bare extension such as 'mp4'",
                self.default_extension
            )));
        }

        Ok(())
    }
}
