//! Installed-version queries through pkg-config.

use tracing::debug;
use tui_install_core::{BuildConfig, CommandRunner, VerifyError};

/// Ask pkg-config for the installed version. `None` if the query fails.
pub fn query_installed_version(runner: &dyn CommandRunner, config: &BuildConfig) -> Option<String> {
    let result = runner.run(&config.version_query_command(), None, false);
    if !result.success {
        debug!(module = %config.pkg_config_module, "Version query failed");
        return None;
    }

    let version = result.stdout.trim().to_string();
    debug!(module = %config.pkg_config_module, %version, "Installed version");
    Some(version)
}

/// Verify that the pinned version is what pkg-config reports.
///
/// Any other version counts as a failure, even if it might be usable. The
/// success message echoes what pkg-config reported.
pub fn verify_installation(
    runner: &dyn CommandRunner,
    config: &BuildConfig,
) -> Result<String, VerifyError> {
    let result = runner.run(&config.version_query_command(), None, false);
    if !result.success {
        let detail = result.stderr.trim();
        let detail = if detail.is_empty() {
            format!("pkg-config could not find {}", config.pkg_config_module)
        } else {
            detail.to_string()
        };
        return Err(VerifyError::QueryFailed(detail));
    }

    let reported = result.stdout.trim();
    if config.matches_pinned(reported) {
        Ok(format!("notcurses {reported} detected"))
    } else {
        Err(VerifyError::VersionMismatch {
            expected: config.version.clone(),
            found: reported.to_string(),
        })
    }
}
