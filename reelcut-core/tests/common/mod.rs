// reelcut-core/tests/common/mod.rs
//
// Mock collaborators for pipeline tests. Every mock records what it was asked
// to do in shared cells so tests can assert on the calls after a run.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use reelcut_core::error::{command_start_error, probe_error};
use reelcut_core::{CoreResult, DurationProbe, ExitOutcome, FileSystem, ProcessRunner};

/// What a mocked command does when launched.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Emit the lines, then exit with the code
    Exit { lines: Vec<String>, code: i32 },
    /// Fail to start
    LaunchFailure,
}

impl MockResponse {
    pub fn ok() -> Self {
        MockResponse::Exit {
            lines: Vec::new(),
            code: 0,
        }
    }

    pub fn ok_with_lines(lines: &[&str]) -> Self {
        MockResponse::Exit {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            code: 0,
        }
    }

    pub fn exit(code: i32) -> Self {
        MockResponse::Exit {
            lines: vec!["Error: something went wrong".to_string()],
            code,
        }
    }
}

/// [`ProcessRunner`] replaying scripted responses in launch order.
/// Launches beyond the script succeed silently.
#[derive(Clone, Default)]
pub struct MockRunner {
    responses: Rc<RefCell<VecDeque<MockResponse>>>,
    calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: MockResponse) -> &Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Calls whose program is `program`.
    pub fn calls_to(&self, program: &str) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|argv| argv.first().map(String::as_str) == Some(program))
            .cloned()
            .collect()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, argv: &[String], on_line: &mut dyn FnMut(&str)) -> CoreResult<ExitOutcome> {
        self.calls.borrow_mut().push(argv.to_vec());
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(MockResponse::ok);

        match response {
            MockResponse::Exit { lines, code } => {
                for line in &lines {
                    on_line(line);
                }
                Ok(ExitOutcome::from_code(code))
            }
            MockResponse::LaunchFailure => Err(command_start_error(
                argv[0].as_str(),
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )),
        }
    }
}

/// [`DurationProbe`] returning fixed durations and recording every call.
#[derive(Clone)]
pub struct MockProbe {
    durations: Rc<RefCell<HashMap<PathBuf, f64>>>,
    default_secs: f64,
    failing: Rc<RefCell<HashSet<PathBuf>>>,
    calls: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockProbe {
    pub fn new(default_secs: f64) -> Self {
        Self {
            durations: Rc::default(),
            default_secs,
            failing: Rc::default(),
            calls: Rc::default(),
        }
    }

    pub fn set_duration(&self, path: impl Into<PathBuf>, secs: f64) {
        self.durations.borrow_mut().insert(path.into(), secs);
    }

    pub fn fail_for(&self, path: impl Into<PathBuf>) {
        self.failing.borrow_mut().insert(path.into());
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl DurationProbe for MockProbe {
    fn duration_secs(&self, path: &Path) -> CoreResult<f64> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if self.failing.borrow().contains(path) {
            return Err(probe_error(path, "'N/A' is not a valid duration"));
        }
        Ok(self
            .durations
            .borrow()
            .get(path)
            .copied()
            .unwrap_or(self.default_secs))
    }
}

/// [`FileSystem`] with predictable temp names and recorded deletions.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    next_id: Rc<Cell<usize>>,
    generated: Rc<RefCell<Vec<PathBuf>>>,
    missing: Rc<RefCell<HashSet<PathBuf>>>,
    removed: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `exists` report `path` as absent.
    pub fn mark_missing(&self, path: impl Into<PathBuf>) {
        self.missing.borrow_mut().insert(path.into());
    }

    pub fn generated(&self) -> Vec<PathBuf> {
        self.generated.borrow().clone()
    }

    pub fn removed(&self) -> Vec<PathBuf> {
        self.removed.borrow().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn unique_temp_path(&self, dir: &Path, extension: &str) -> PathBuf {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let path = dir.join(format!("tmp-{id}.{extension}"));
        self.generated.borrow_mut().push(path.clone());
        path
    }

    fn exists(&self, path: &Path) -> bool {
        !self.missing.borrow().contains(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
