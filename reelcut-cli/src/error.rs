// ============================================================================
// reelcut-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result Alias and Error Reporting
//
// The CLI does not define its own error enum. Every failure is a CoreError,
// printed with its guidance line before the process exits non-zero.

use console::style;
use reelcut_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Formats an error and its guidance for stderr.
pub fn render_error(error: &CoreError) -> String {
    let mut text = format!("{} {}", style("Error:").red().bold(), error);
    if let Some(hint) = error.guidance() {
        text.push('\n');
        text.push_str(&format!("{} {}", style("Hint:").yellow(), hint));
    }
    text
}
