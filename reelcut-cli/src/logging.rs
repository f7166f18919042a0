// ============================================================================
// reelcut-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// RUST_LOG is honoured when set. Otherwise the level is `info`, or `debug`
// with --verbose. Raw tool output is logged at `trace` under the
// `tool_output` target, e.g. RUST_LOG=tool_output=trace.

use std::io::Write;

use env_logger::{Builder, Env};

/// Installs the global logger. Safe to call once per process.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let result = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", get_timestamp(), level, record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized (default level: {})", default_level);
    }
}

/// Returns the current local time as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
