//! Pinned notcurses source build.
//!
//! Stages run strictly in order and the first failure short-circuits:
//! stage → clone → checkout → configure → compile → install → refresh.
//! The workspace is a `TempDir`, so it is removed however the build ends.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use tui_install_core::{BuildConfig, BuildError, BuildStage, CommandRunner, OutputSink, Platform};

use crate::command::run_attended;

const INSTALL_COMMAND: &str = "sudo make install";
const REFRESH_COMMAND: &str = "sudo ldconfig";

/// Parallel compile jobs: logical CPU count, or `fallback` if undetectable.
pub fn build_parallelism(fallback: usize) -> usize {
    resolve_jobs(num_cpus::get(), fallback)
}

fn resolve_jobs(detected: usize, fallback: usize) -> usize {
    if detected == 0 { fallback } else { detected }
}

/// Drives one build of the pinned notcurses release.
pub struct SourceBuilder<'a> {
    runner: &'a dyn CommandRunner,
    sink: &'a dyn OutputSink,
    config: &'a BuildConfig,
    platform: Platform,
    jobs: usize,
    workspace_parent: Option<PathBuf>,
}

impl<'a> SourceBuilder<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        sink: &'a dyn OutputSink,
        config: &'a BuildConfig,
        platform: Platform,
    ) -> Self {
        Self {
            runner,
            sink,
            config,
            platform,
            jobs: build_parallelism(config.fallback_jobs),
            workspace_parent: None,
        }
    }

    /// Override the compile parallelism.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub const fn jobs(&self) -> usize {
        self.jobs
    }

    /// Create the build workspace under `parent` instead of the system temp dir.
    #[must_use]
    pub fn with_workspace_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.workspace_parent = Some(parent.into());
        self
    }

    /// Run the full build in a fresh temporary workspace.
    pub fn build(&self) -> Result<String, BuildError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("notcurses-build-");
        let workspace = match &self.workspace_parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(|e| BuildError::Workspace(e.to_string()))?;
        debug!(workspace = %workspace.path().display(), "Created build workspace");

        let result = self.build_in(workspace.path());

        let path = workspace.path().to_path_buf();
        if let Err(e) = workspace.close() {
            warn!(workspace = %path.display(), error = %e, "Failed to remove build workspace");
        }

        result
    }

    fn build_in(&self, workspace: &Path) -> Result<String, BuildError> {
        self.sink.progress("Downloading notcurses source...");
        self.run_stage(
            BuildStage::Clone,
            &self.config.clone_command(),
            workspace,
            BuildError::Clone,
        )?;

        let source_dir = workspace.join(&self.config.checkout_dir);
        self.run_stage(
            BuildStage::Checkout,
            &self.config.checkout_command(),
            &source_dir,
            |stderr| BuildError::Checkout {
                tag: self.config.tag.clone(),
                stderr,
            },
        )?;

        let build_dir = source_dir.join("build");
        fs::create_dir_all(&build_dir).map_err(|e| {
            BuildError::Configure(format!("cannot create {}: {e}", build_dir.display()))
        })?;

        self.sink.progress("Configuring build...");
        self.run_stage(
            BuildStage::Configure,
            &self.config.configure_command(),
            &build_dir,
            BuildError::Configure,
        )?;

        self.sink
            .progress("Building notcurses (this may take a few minutes)...");
        self.run_stage(
            BuildStage::Compile,
            &self.config.compile_command(self.jobs),
            &build_dir,
            BuildError::Compile,
        )?;

        self.sink.progress("Installing notcurses...");
        self.run_stage(
            BuildStage::Install,
            INSTALL_COMMAND,
            &build_dir,
            BuildError::Install,
        )?;

        self.refresh_linker_cache();

        info!(version = %self.config.version, "notcurses installed");
        Ok(format!(
            "notcurses {} installed successfully",
            self.config.version
        ))
    }

    fn run_stage(
        &self,
        stage: BuildStage,
        command: &str,
        cwd: &Path,
        on_failure: impl FnOnce(String) -> BuildError,
    ) -> Result<(), BuildError> {
        let step = BuildStage::ALL
            .iter()
            .position(|s| *s == stage)
            .map_or(0, |i| i + 1);
        debug!(%stage, step, total = BuildStage::ALL.len(), command, "Build stage");

        let result = run_attended(self.runner, self.sink, command, Some(cwd), true);
        if result.success {
            Ok(())
        } else {
            warn!(%stage, "Build stage failed");
            Err(on_failure(result.stderr))
        }
    }

    /// Linux only. A failing refresh is logged but does not fail the build.
    fn refresh_linker_cache(&self) {
        if !self.platform.is_linux_family() {
            debug!(platform = %self.platform, "Skipping linker cache refresh");
            return;
        }

        let result = run_attended(self.runner, self.sink, REFRESH_COMMAND, None, false);
        if !result.success {
            warn!(stderr = %result.stderr.trim(), "Linker cache refresh failed");
        }
    }
}
