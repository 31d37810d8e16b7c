//! Command runner trait definition.

use std::path::Path;

/// Outcome of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// A successful result with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given stderr.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Whether `command` may ask for input on the terminal (`sudo` or the AUR helper).
pub fn may_prompt(command: &str) -> bool {
    command
        .split_whitespace()
        .any(|word| matches!(word, "sudo" | "yay"))
}

/// Runs shell command strings.
///
/// Implementations must never panic or abort the caller: every failure,
/// including a command that could not be spawned, is reported through
/// `CommandResult::success`.
pub trait CommandRunner: Send + Sync {
    /// Run `command` through the platform shell, optionally inside `cwd`.
    ///
    /// `fail_on_nonzero` marks a non-zero exit as a failure worth reporting;
    /// when `false` the caller expects the command may fail (e.g. a probe).
    /// Either way `success` reflects the real exit status.
    fn run(&self, command: &str, cwd: Option<&Path>, fail_on_nonzero: bool) -> CommandResult;

    /// Shorthand for `run(command, cwd, true)`.
    fn run_checked(&self, command: &str, cwd: Option<&Path>) -> CommandResult {
        self.run(command, cwd, true)
    }
}
