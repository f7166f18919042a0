//! Tracking and deletion of intermediate files.
//!
//! Paths are registered before the tool that writes them is launched, so a
//! half-written file from a failed trim is removed as well. Cleanup drains the
//! list: a second pass (explicit or from `Drop`) deletes nothing.

use std::io;
use std::path::{Path, PathBuf};

use crate::external::FileSystem;

pub struct IntermediateArtifacts<'a, F: FileSystem> {
    fs: &'a F,
    paths: Vec<PathBuf>,
}

impl<'a, F: FileSystem> IntermediateArtifacts<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            paths: Vec::new(),
        }
    }

    /// Registers a generated temp file for deletion.
    pub fn register(&mut self, path: PathBuf) {
        log::debug!("Registered intermediate file {}", path.display());
        self.paths.push(path);
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Deletes every registered file and returns how many were removed.
    ///
    /// Files that never came into existence are skipped; other deletion
    /// failures are logged and otherwise ignored.
    pub fn cleanup(&mut self) -> usize {
        let mut removed = 0;
        for path in self.paths.drain(..) {
            match self.fs.remove_file(&path) {
                Ok(()) => {
                    log::debug!("Removed intermediate file {}", path.display());
                    removed += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("Intermediate file {} was never created", path.display());
                }
                Err(e) => log_cleanup_failure(&path, &e),
            }
        }
        removed
    }
}

impl<F: FileSystem> Drop for IntermediateArtifacts<'_, F> {
    fn drop(&mut self) {
        if !self.paths.is_empty() {
            log::warn!(
                "Removing {} intermediate file(s) left after an interrupted run",
                self.paths.len()
            );
            self.cleanup();
        }
    }
}

fn log_cleanup_failure(path: &Path, error: &io::Error) {
    log::warn!(
        "Failed to remove intermediate file {}: {}",
        path.display(),
        error
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::StdFileSystem;
    use std::fs;

    #[test]
    fn cleanup_removes_existing_and_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.mp4");
        fs::write(&existing, b"data").unwrap();

        let fs_impl = StdFileSystem;
        let mut artifacts = IntermediateArtifacts::new(&fs_impl);
        artifacts.register(existing.clone());
        artifacts.register(dir.path().join("never-written.mp4"));

        assert_eq!(artifacts.cleanup(), 1);
        assert!(!existing.exists());
        assert!(artifacts.is_empty());
    }

    #[test]
    fn second_cleanup_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.mp4");
        fs::write(&path, b"data").unwrap();

        let fs_impl = StdFileSystem;
        let mut artifacts = IntermediateArtifacts::new(&fs_impl);
        artifacts.register(path);
        assert_eq!(artifacts.cleanup(), 1);
        assert_eq!(artifacts.cleanup(), 0);
    }

    #[test]
    fn drop_cleans_up_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.mp4");
        fs::write(&path, b"data").unwrap();

        let fs_impl = StdFileSystem;
        {
            let mut artifacts = IntermediateArtifacts::new(&fs_impl);
            artifacts.register(path.clone());
        }
        assert!(!path.exists());
    }
}
