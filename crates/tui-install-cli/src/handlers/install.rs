//! The install pipeline: detect, fast path, dependencies, build, verify.

use tracing::{debug, info};
use tui_install_core::{OutputSink, PlatformInfo};
use tui_install_runtime::{
    SourceBuilder, detect_platform, install_dependencies, query_installed_version,
    verify_installation,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::panel;

/// Which stages to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallArgs {
    pub skip_deps: bool,
    pub skip_build: bool,
    pub test: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The pinned version was already present and no verification was asked for.
    AlreadyInstalled,
    /// The pipeline ran to the end.
    Installed,
}

/// Run the installer.
///
/// Failures are printed through the sink before being returned, so the
/// caller only has to map the error to an exit code.
pub fn execute(ctx: &CliContext, args: InstallArgs) -> Result<Completion, CliError> {
    let sink = ctx.sink.as_ref();
    sink.plain(&panel::banner(&ctx.build));

    let info = detect_platform(&ctx.os, ctx.probe.as_ref());
    sink.notice(&format!("Detected platform: {info}"));

    if !info.is_supported() {
        sink.error("Unsupported platform detected");
        sink.plain(&panel::supported_platforms());
        return Err(CliError::UnsupportedPlatform(ctx.os.to_string()));
    }

    if pinned_version_present(ctx) {
        sink.success(&format!("notcurses {} already installed", ctx.build.version));
        if !args.test {
            return Ok(Completion::AlreadyInstalled);
        }
    }

    if args.skip_deps {
        debug!("Skipping dependency installation");
    } else {
        install_deps(ctx, info)?;
    }

    if args.skip_build {
        debug!("Skipping notcurses build");
    } else if info.platform.provides_notcurses_package() {
        sink.notice(&format!(
            "notcurses is provided by {} on {}; skipping source build",
            info.package_manager, info.platform
        ));
    } else {
        build_from_source(ctx, info)?;
    }

    if args.test {
        sink.progress("Testing installation...");
        let message = verify_installation(ctx.runner.as_ref(), &ctx.build)
            .map_err(|e| report(sink, e.into()))?;
        sink.success(&message);
    }

    sink.plain(&panel::completion());
    info!(platform = %info, "Installation complete");
    Ok(Completion::Installed)
}

fn pinned_version_present(ctx: &CliContext) -> bool {
    query_installed_version(ctx.runner.as_ref(), &ctx.build)
        .is_some_and(|version| ctx.build.matches_pinned(&version))
}

fn install_deps(ctx: &CliContext, info: PlatformInfo) -> Result<(), CliError> {
    let sink = ctx.sink.as_ref();
    sink.start_task("Installing dependencies...");
    let result = install_dependencies(
        info.platform,
        info.package_manager,
        ctx.runner.as_ref(),
        sink,
    );
    sink.finish_task();

    let message = result.map_err(|e| report(sink, e.into()))?;
    sink.success(&message);
    Ok(())
}

fn build_from_source(ctx: &CliContext, info: PlatformInfo) -> Result<(), CliError> {
    let sink = ctx.sink.as_ref();
    sink.start_task(&format!("Building notcurses {}...", ctx.build.version));
    let result = SourceBuilder::new(ctx.runner.as_ref(), sink, &ctx.build, info.platform).build();
    sink.finish_task();

    let message = result.map_err(|e| report(sink, e.into()))?;
    sink.success(&message);
    Ok(())
}

fn report(sink: &dyn OutputSink, err: CliError) -> CliError {
    sink.error(&err.to_string());
    err
}
