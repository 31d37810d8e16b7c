//! Native dependency installation.

use tracing::{info, warn};
use tui_install_core::{
    CommandRunner, InstallError, OutputSink, PackageManager, Platform, install_template,
    packages_for,
};

use crate::command::run_attended;

/// Look up the package list and command template, platform first.
fn resolve(
    platform: Platform,
    manager: PackageManager,
) -> Result<(&'static str, &'static [&'static str]), InstallError> {
    let packages = packages_for(platform).ok_or(InstallError::UnsupportedPlatform(platform))?;
    let template =
        install_template(manager, platform).ok_or(InstallError::UnsupportedPackageManager(manager))?;
    Ok((template, packages))
}

/// Build the install command for `platform` using `manager`.
///
/// The command is `<template> <space-joined packages>`.
pub fn install_command(platform: Platform, manager: PackageManager) -> Result<String, InstallError> {
    let (template, packages) = resolve(platform, manager)?;
    Ok(format!("{template} {}", packages.join(" ")))
}

/// Install the native build dependencies for `platform`.
///
/// Packages already installed before a failure are left in place; package
/// managers are idempotent, so re-running is the recovery path.
pub fn install_dependencies(
    platform: Platform,
    manager: PackageManager,
    runner: &dyn CommandRunner,
    sink: &dyn OutputSink,
) -> Result<String, InstallError> {
    let (template, packages) = resolve(platform, manager)?;
    let packages = packages.join(" ");
    let command = format!("{template} {packages}");

    sink.progress(&format!("Installing dependencies: {packages}"));
    info!(%platform, %manager, "Installing dependencies");

    let result = run_attended(runner, sink, &command, None, true);
    if !result.success {
        warn!(%platform, %manager, "Dependency installation failed");
        return Err(InstallError::CommandFailed(result.stderr));
    }

    Ok("Dependencies installed successfully".to_string())
}
