//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// The `process` command: builds a job and runs the pipeline.
pub mod process;

/// The `check` command: verifies the external tools.
pub mod check;
