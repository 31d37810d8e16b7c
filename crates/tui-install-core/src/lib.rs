//! Core domain types and port definitions for tui-install.
//!
//! This crate is pure: it knows which platforms exist, which packages each
//! one needs, how the pinned notcurses build is described, and which
//! capabilities (running commands, probing `PATH`, printing status) the
//! installer needs from the outside world. It never spawns a process itself.
//!
//! Adapters live in `tui-install-runtime`; the composition root lives in
//! `tui-install-cli`.

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{
    BuildConfig, DEFAULT_BUILD_TYPE, DEFAULT_FALLBACK_JOBS, DEFAULT_PKG_CONFIG_MODULE,
    DEFAULT_REPOSITORY_URL, PINNED_TAG, PINNED_VERSION,
};
pub use domain::{OsKind, PackageManager, Platform, PlatformInfo, install_template, packages_for};
pub use error::{BuildError, BuildStage, InstallError, VerifyError};
pub use ports::{
    CommandResult, CommandRunner, ExecutableProbe, NoopSink, OutputSink, Status, may_prompt,
};
