//! Shell command execution.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use tui_install_core::{CommandResult, CommandRunner, OutputSink, may_prompt};

/// Runs command strings through the platform shell.
///
/// Stdout and stderr are captured; stdin stays attached to the terminal so
/// `sudo` and AUR helpers can still prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, fail_on_nonzero: bool) -> CommandResult {
        let mut cmd = shell_command(command);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::inherit());

        debug!(command, cwd = ?cwd, "Running command");

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                warn!(command, error = %e, "Failed to spawn command");
                return CommandResult::failed(format!("failed to run `{command}`: {e}"));
            }
        };

        let success = output.status.success();
        if !success {
            if fail_on_nonzero {
                warn!(command, code = ?output.status.code(), "Command failed");
            } else {
                debug!(command, code = ?output.status.code(), "Command exited non-zero");
            }
        }

        CommandResult {
            success,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run `command`, hiding the sink's spinner while it may prompt for a password.
pub fn run_attended(
    runner: &dyn CommandRunner,
    sink: &dyn OutputSink,
    command: &str,
    cwd: Option<&Path>,
    fail_on_nonzero: bool,
) -> CommandResult {
    if !may_prompt(command) {
        return runner.run(command, cwd, fail_on_nonzero);
    }

    let mut result = CommandResult::default();
    sink.suspend(&mut || result = runner.run(command, cwd, fail_on_nonzero));
    result
}
