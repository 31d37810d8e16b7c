//! Domain types for platform detection and dependency lookup.

mod packages;
mod platform;

pub use packages::{install_template, packages_for};
pub use platform::{OsKind, PackageManager, Platform, PlatformInfo};
