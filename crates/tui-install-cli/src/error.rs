//! CLI-level error type and exit-code mapping.

use thiserror::Error;
use tui_install_core::{BuildError, InstallError, VerifyError};

/// A fatal installer failure. The message has already been shown to the
/// user by the handler when this is returned.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unsupported platform detected (os: {0})")]
    UnsupportedPlatform(String),

    #[error(transparent)]
    Dependencies(#[from] InstallError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Verification(#[from] VerifyError),
}

impl CliError {
    /// Every installer failure is fatal and exits with 1.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedPlatform(_)
            | Self::Dependencies(_)
            | Self::Build(_)
            | Self::Verification(_) => 1,
        }
    }
}
