//! Error types for the installer stages.
//!
//! Every variant's `Display` is the exact line shown to the user, with the
//! failing command's captured stderr appended.

use std::fmt;

use thiserror::Error;

use crate::domain::{PackageManager, Platform};

/// Errors from the dependency-install stage.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(Platform),

    #[error("Unsupported package manager: {0}")]
    UnsupportedPackageManager(PackageManager),

    #[error("Failed to install dependencies: {0}")]
    CommandFailed(String),
}

/// Steps of the source build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStage {
    Stage,
    Clone,
    Checkout,
    Configure,
    Compile,
    Install,
    Refresh,
}

impl BuildStage {
    pub const ALL: [Self; 7] = [
        Self::Stage,
        Self::Clone,
        Self::Checkout,
        Self::Configure,
        Self::Compile,
        Self::Install,
        Self::Refresh,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Clone => "clone",
            Self::Checkout => "checkout",
            Self::Configure => "configure",
            Self::Compile => "compile",
            Self::Install => "install",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the source build. Refresh never fails the build, so it has
/// no variant.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to create build workspace: {0}")]
    Workspace(String),

    #[error("Failed to clone notcurses: {0}")]
    Clone(String),

    #[error("Failed to checkout {tag}: {stderr}")]
    Checkout { tag: String, stderr: String },

    #[error("Failed to configure build: {0}")]
    Configure(String),

    #[error("Failed to build notcurses: {0}")]
    Compile(String),

    #[error("Failed to install notcurses: {0}")]
    Install(String),
}

impl BuildError {
    /// The stage that failed.
    pub const fn stage(&self) -> BuildStage {
        match self {
            Self::Workspace(_) => BuildStage::Stage,
            Self::Clone(_) => BuildStage::Clone,
            Self::Checkout { .. } => BuildStage::Checkout,
            Self::Configure(_) => BuildStage::Configure,
            Self::Compile(_) => BuildStage::Compile,
            Self::Install(_) => BuildStage::Install,
        }
    }
}

/// Errors from post-install verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Installation verification failed: {0}")]
    QueryFailed(String),

    #[error("Installation verification failed: expected notcurses {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
}
