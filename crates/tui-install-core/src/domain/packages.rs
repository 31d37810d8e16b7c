//! Fixed dependency lists and install command templates.

use super::platform::{PackageManager, Platform};

const UBUNTU_PACKAGES: &[&str] = &[
    "build-essential",
    "cmake",
    "pkg-config",
    "libncurses-dev",
    "libunistring-dev",
    "libavformat-dev",
    "libavutil-dev",
    "libswscale-dev",
    "libqrcodegen-dev",
    "git",
];

const FEDORA_PACKAGES: &[&str] = &[
    "gcc-c++",
    "cmake",
    "pkgconfig",
    "ncurses-devel",
    "libunistring-devel",
    "ffmpeg-devel",
    "qrencode-devel",
    "git",
];

// notcurses itself comes from the AUR (arch) or Homebrew (macos)
const NOTCURSES_PACKAGE: &[&str] = &["notcurses"];

const MSYS2_PACKAGES: &[&str] = &[
    "mingw-w64-x86_64-gcc",
    "mingw-w64-x86_64-cmake",
    "mingw-w64-x86_64-pkg-config",
    "mingw-w64-x86_64-ncurses",
    "mingw-w64-x86_64-ffmpeg",
    "git",
];

/// Packages to install for `platform`, or `None` if the platform has no list.
pub const fn packages_for(platform: Platform) -> Option<&'static [&'static str]> {
    match platform {
        Platform::Ubuntu => Some(UBUNTU_PACKAGES),
        Platform::Fedora => Some(FEDORA_PACKAGES),
        Platform::Arch | Platform::Macos => Some(NOTCURSES_PACKAGE),
        Platform::Msys2 => Some(MSYS2_PACKAGES),
        Platform::Windows | Platform::Linux | Platform::Unknown => None,
    }
}

/// Install command prefix for `manager`, or `None` if the manager is unsupported.
///
/// `pacman` resolves to the AUR helper everywhere except MSYS2, where the
/// packages come from the official repository.
pub const fn install_template(manager: PackageManager, platform: Platform) -> Option<&'static str> {
    match manager {
        PackageManager::Apt => Some("sudo apt-get update && sudo apt-get install -y"),
        PackageManager::Dnf => Some("sudo dnf install -y"),
        PackageManager::Pacman => match platform {
            Platform::Msys2 => Some("sudo pacman -S --needed --noconfirm"),
            _ => Some("yay -S"),
        },
        PackageManager::Brew => Some("brew install"),
        PackageManager::Msys2 | PackageManager::Vcpkg | PackageManager::Unknown => None,
    }
}
