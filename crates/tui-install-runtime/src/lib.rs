//! OS-level adapters for tui-install.
//!
//! Implements the ports from `tui-install-core` against the real system
//! (`sh -c`/`cmd /C`, `PATH` lookup) and provides the installer
//! stages that are driven through those ports:
//!
//! - [`detect`]: platform and package-manager detection
//! - [`install`]: native dependency installation
//! - [`build`]: pinned notcurses source build
//! - [`verify`]: pkg-config version query

pub mod build;
mod command;
pub mod detect;
pub mod install;
pub mod verify;

pub use build::{SourceBuilder, build_parallelism};
pub use command::ShellRunner;
pub use detect::{PathProbe, detect, detect_platform};
pub use install::{install_command, install_dependencies};
pub use verify::{query_installed_version, verify_installation};
