//! Platform-specific helpers.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Program used to reveal a folder in the platform's file manager.
pub fn folder_opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Opens `dir` in the file manager without waiting for it.
pub fn open_folder(dir: &Path) -> io::Result<()> {
    Command::new(folder_opener())
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
