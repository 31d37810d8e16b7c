//! Scripted test doubles for the installer ports.
//!
//! Available in this crate's tests and, through the `test-utils` feature,
//! in downstream crates' tests.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::{CommandResult, CommandRunner, ExecutableProbe, OutputSink, Status};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One recorded call to `ScriptedRunner::run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub fail_on_nonzero: bool,
}

/// A `CommandRunner` that answers from a script and records every call.
///
/// Responses are matched by command prefix in registration order. Commands
/// with no matching response succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<Vec<(String, CommandResult)>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` with `result`.
    #[must_use]
    pub fn respond(self, prefix: &str, result: CommandResult) -> Self {
        lock(&self.responses).push((prefix.to_string(), result));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        lock(&self.calls).clone()
    }

    pub fn commands(&self) -> Vec<String> {
        lock(&self.calls).iter().map(|c| c.command.clone()).collect()
    }

    /// Whether any recorded command starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        lock(&self.calls).iter().any(|c| c.command.starts_with(prefix))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, fail_on_nonzero: bool) -> CommandResult {
        lock(&self.calls).push(Invocation {
            command: command.to_string(),
            cwd: cwd.map(Path::to_path_buf),
            fail_on_nonzero,
        });

        lock(&self.responses)
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map_or_else(|| CommandResult::ok(""), |(_, result)| result.clone())
    }
}

/// An `ExecutableProbe` backed by a fixed set of names.
#[derive(Debug, Default, Clone)]
pub struct StaticProbe {
    available: Vec<String>,
}

impl StaticProbe {
    pub fn with(names: &[&str]) -> Self {
        Self {
            available: names.iter().map(|n| (*n).to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl ExecutableProbe for StaticProbe {
    fn is_available(&self, name: &str) -> bool {
        self.available.iter().any(|n| n == name)
    }
}

/// An `OutputSink` that records every line.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(Status, String)>>,
    tasks: Mutex<Vec<String>>,
    suspensions: Mutex<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Status, String)> {
        lock(&self.lines).clone()
    }

    /// Messages emitted with `status`.
    pub fn messages(&self, status: Status) -> Vec<String> {
        lock(&self.lines)
            .iter()
            .filter(|(s, _)| *s == status)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any line with `status` contains `needle`.
    pub fn contains(&self, status: Status, needle: &str) -> bool {
        self.messages(status).iter().any(|m| m.contains(needle))
    }

    pub fn tasks(&self) -> Vec<String> {
        lock(&self.tasks).clone()
    }

    /// How many times `suspend` ran work.
    pub fn suspensions(&self) -> usize {
        *lock(&self.suspensions)
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, status: Status, message: &str) {
        lock(&self.lines).push((status, message.to_string()));
    }

    fn start_task(&self, message: &str) {
        lock(&self.tasks).push(message.to_string());
    }

    fn finish_task(&self) {}

    fn suspend(&self, work: &mut dyn FnMut()) {
        *lock(&self.suspensions) += 1;
        work();
    }
}
