//! Composition root: wires the real adapters into a `CliContext`.

use std::sync::Arc;

use tui_install_core::{BuildConfig, CommandRunner, ExecutableProbe, OsKind, OutputSink};
use tui_install_runtime::{PathProbe, ShellRunner};

use crate::presentation::ConsoleSink;

/// Inputs that are fixed for one run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub build: BuildConfig,
    pub os: OsKind,
}

impl CliConfig {
    /// The pinned notcurses build on the host OS.
    pub fn with_defaults() -> Self {
        Self {
            build: BuildConfig::default(),
            os: OsKind::current(),
        }
    }
}

/// Everything a handler needs, behind ports so tests can substitute fakes.
pub struct CliContext {
    pub runner: Arc<dyn CommandRunner>,
    pub probe: Arc<dyn ExecutableProbe>,
    pub sink: Arc<dyn OutputSink>,
    pub os: OsKind,
    pub build: BuildConfig,
}

/// Build the production context: shell runner, `PATH` probe, console output.
pub fn bootstrap(config: CliConfig) -> CliContext {
    CliContext {
        runner: Arc::new(ShellRunner::new()),
        probe: Arc::new(PathProbe),
        sink: Arc::new(ConsoleSink::new()),
        os: config.os,
        build: config.build,
    }
}
