//! Implementation of the 'check' subcommand.

use reelcut_core::{CoreError, check_dependency};

use crate::cli::ToolArgs;
use crate::config::{MUX_TOOL_VERSION_ARG, PROBE_TOOL_VERSION_ARG, TRIM_TOOL_VERSION_ARG};
use crate::error::CliResult;
use crate::terminal::print_check_line;

/// Tries to launch every configured tool; fails with the first launch error.
pub fn run_check(tools: &ToolArgs) -> CliResult<()> {
    let checks = [
        ("trim tool", tools.trim_tool.as_str(), TRIM_TOOL_VERSION_ARG),
        ("mux tool", tools.mux_tool.as_str(), MUX_TOOL_VERSION_ARG),
        ("probe tool", tools.probe_tool.as_str(), PROBE_TOOL_VERSION_ARG),
    ];

    let mut first_error: Option<CoreError> = None;
    for (label, program, version_arg) in checks {
        match check_dependency(program, version_arg) {
            Ok(()) => print_check_line(label, program, true),
            Err(e) => {
                print_check_line(label, program, false);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
