// reelcut-cli/src/lib.rs
//
// Library portion of the Reelcut CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ProcessArgs, ToolArgs};
pub use commands::check::run_check;
pub use commands::process::run_process;
pub use error::CliResult;
