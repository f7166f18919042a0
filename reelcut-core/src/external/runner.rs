//! Launching external tools and streaming their output.
//!
//! stdout and stderr share one pipe, so lines reach the caller in the order
//! the tool wrote them. The pipe is read on the calling thread as data
//! arrives.

use std::io::{self, Read};
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::{ExitOutcome, ProcessRunner};

/// [`ProcessRunner`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, argv: &[String], on_line: &mut dyn FnMut(&str)) -> CoreResult<ExitOutcome> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            CoreError::InvalidSpec("cannot launch an empty command line".to_string())
        })?;

        log::debug!("Launching: {}", argv.join(" "));

        let (output, writer) = io::pipe()?;
        // The Command holds the parent's copies of the write end; it must be
        // dropped before reading or the pipe never reports end of file.
        let mut child = {
            let mut command = Command::new(program);
            command
                .args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            command
                .spawn()
                .map_err(|e| command_start_error(program.as_str(), e))?
        };

        let streamed = for_each_line(output, &mut |line| {
            log::trace!(target: "tool_output", "{}", line);
            on_line(line);
        });
        if let Err(e) = streamed {
            log::warn!("Error reading output of '{}': {}", program, e);
        }

        let status = child.wait()?;
        log::debug!("'{}' exited with {:?}", program, status.code());
        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

/// Splits a byte stream into lines ending at `\n` or `\r` and hands every
/// trimmed, non-empty line to `on_line`. Invalid UTF-8 is replaced, never
/// rejected.
pub(crate) fn for_each_line<R: Read>(
    mut reader: R,
    on_line: &mut dyn FnMut(&str),
) -> io::Result<()> {
    let mut pending: Vec<u8> = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for &byte in &buf[..read] {
            if byte == b'\n' || byte == b'\r' {
                emit_line(&mut pending, on_line);
            } else {
                pending.push(byte);
            }
        }
    }

    emit_line(&mut pending, on_line);
    Ok(())
}

fn emit_line(pending: &mut Vec<u8>, on_line: &mut dyn FnMut(&str)) {
    if pending.is_empty() {
        return;
    }
    let line = String::from_utf8_lossy(pending);
    let line = line.trim();
    if !line.is_empty() {
        on_line(line);
    }
    pending.clear();
}
