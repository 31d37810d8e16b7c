//! Platform and package-manager identification.

use std::fmt;

/// Raw operating system identifier that platform detection starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    Darwin,
    Windows,
    Other(String),
}

impl OsKind {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Map an OS identifier (`linux`, `darwin`/`macos`, `windows`, ...) to an `OsKind`.
    ///
    /// Matching is case-insensitive; anything unrecognised is kept verbatim
    /// in `Other` so it can be reported back to the user.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            "windows" => Self::Windows,
            _ => Self::Other(identifier.to_string()),
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::Darwin => f.write_str("darwin"),
            Self::Windows => f.write_str("windows"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Platform name used to select a dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ubuntu,
    Fedora,
    Arch,
    Macos,
    Windows,
    /// MSYS2 environment on Windows. Never produced by detection, but owns
    /// a package list and selects the native pacman template.
    Msys2,
    /// Linux without a recognised package manager.
    Linux,
    Unknown,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ubuntu => "ubuntu",
            Self::Fedora => "fedora",
            Self::Arch => "arch",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::Msys2 => "msys2",
            Self::Linux => "linux",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the dynamic-linker cache must be refreshed after installing.
    pub const fn is_linux_family(self) -> bool {
        matches!(self, Self::Ubuntu | Self::Fedora | Self::Arch | Self::Linux)
    }

    /// Platforms whose package manager already ships notcurses, so the
    /// source build is skipped.
    pub const fn provides_notcurses_package(self) -> bool {
        matches!(self, Self::Arch | Self::Macos)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package manager found on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Apt,
    Dnf,
    Pacman,
    Brew,
    Msys2,
    Vcpkg,
    Unknown,
}

impl PackageManager {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
            Self::Brew => "brew",
            Self::Msys2 => "msys2",
            Self::Vcpkg => "vcpkg",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of platform detection. Computed once at startup and passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub package_manager: PackageManager,
}

impl PlatformInfo {
    pub const fn new(platform: Platform, package_manager: PackageManager) -> Self {
        Self {
            platform,
            package_manager,
        }
    }

    pub const fn unknown() -> Self {
        Self::new(Platform::Unknown, PackageManager::Unknown)
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self.platform, Platform::Unknown)
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.platform, self.package_manager)
    }
}
