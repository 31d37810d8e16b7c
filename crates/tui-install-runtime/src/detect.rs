//! Platform and package-manager detection.

use tracing::debug;
use tui_install_core::{ExecutableProbe, OsKind, PackageManager, Platform, PlatformInfo};

/// Probes `PATH` for executables using the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl ExecutableProbe for PathProbe {
    fn is_available(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

/// Linux package managers in probe order.
const LINUX_MANAGERS: &[(&str, PlatformInfo)] = &[
    (
        "apt-get",
        PlatformInfo::new(Platform::Ubuntu, PackageManager::Apt),
    ),
    ("dnf", PlatformInfo::new(Platform::Fedora, PackageManager::Dnf)),
    (
        "pacman",
        PlatformInfo::new(Platform::Arch, PackageManager::Pacman),
    ),
];

/// Windows package managers in probe order. `pacman` on Windows means MSYS2.
const WINDOWS_MANAGERS: &[(&str, PlatformInfo)] = &[
    (
        "pacman",
        PlatformInfo::new(Platform::Windows, PackageManager::Msys2),
    ),
    (
        "vcpkg",
        PlatformInfo::new(Platform::Windows, PackageManager::Vcpkg),
    ),
];

fn first_available(
    probe: &dyn ExecutableProbe,
    candidates: &[(&str, PlatformInfo)],
) -> Option<PlatformInfo> {
    candidates
        .iter()
        .find(|(executable, _)| probe.is_available(executable))
        .map(|(_, info)| *info)
}

/// Detect the platform for `os`, probing executables in strict priority order.
pub fn detect_platform(os: &OsKind, probe: &dyn ExecutableProbe) -> PlatformInfo {
    let info = match os {
        OsKind::Linux => first_available(probe, LINUX_MANAGERS)
            .unwrap_or(PlatformInfo::new(Platform::Linux, PackageManager::Unknown)),
        OsKind::Darwin => PlatformInfo::new(Platform::Macos, PackageManager::Brew),
        OsKind::Windows => first_available(probe, WINDOWS_MANAGERS)
            .unwrap_or(PlatformInfo::new(Platform::Windows, PackageManager::Unknown)),
        OsKind::Other(_) => PlatformInfo::unknown(),
    };

    debug!(os = %os, platform = %info.platform, manager = %info.package_manager, "Detected platform");
    info
}

/// Detect the host platform.
pub fn detect() -> PlatformInfo {
    detect_platform(&OsKind::current(), &PathProbe)
}
