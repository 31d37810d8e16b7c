//! Pinned build description for notcurses.
//!
//! There is no configuration file: every value here is a compile-time
//! default. The struct exists so the orchestrator and tests can inject a
//! different pin or job count without touching globals.

/// Upstream repository cloned by the source build.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/dankamongmen/notcurses.git";

/// Release tag checked out after cloning.
pub const PINNED_TAG: &str = "v3.0.11";

/// Version string reported by pkg-config for the pinned tag.
pub const PINNED_VERSION: &str = "3.0.11";

/// `CMAKE_BUILD_TYPE` passed at configure time.
pub const DEFAULT_BUILD_TYPE: &str = "Release";

/// pkg-config module queried for the installed version.
pub const DEFAULT_PKG_CONFIG_MODULE: &str = "notcurses";

/// Parallel jobs used when the CPU count cannot be determined.
pub const DEFAULT_FALLBACK_JOBS: usize = 4;

/// Description of the source build and the version it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub repository_url: String,
    /// Directory name `git clone` creates inside the workspace.
    pub checkout_dir: String,
    pub tag: String,
    pub version: String,
    pub build_type: String,
    pub pkg_config_module: String,
    pub fallback_jobs: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            checkout_dir: "notcurses".to_string(),
            tag: PINNED_TAG.to_string(),
            version: PINNED_VERSION.to_string(),
            build_type: DEFAULT_BUILD_TYPE.to_string(),
            pkg_config_module: DEFAULT_PKG_CONFIG_MODULE.to_string(),
            fallback_jobs: DEFAULT_FALLBACK_JOBS,
        }
    }
}

impl BuildConfig {
    pub fn clone_command(&self) -> String {
        format!("git clone {}", self.repository_url)
    }

    pub fn checkout_command(&self) -> String {
        format!("git checkout {}", self.tag)
    }

    pub fn configure_command(&self) -> String {
        format!("cmake .. -DCMAKE_BUILD_TYPE={}", self.build_type)
    }

    pub fn compile_command(&self, jobs: usize) -> String {
        format!("make -j{jobs}")
    }

    pub fn version_query_command(&self) -> String {
        format!("pkg-config --modversion {}", self.pkg_config_module)
    }

    /// Whether a version query's output names the pinned version as a
    /// whole whitespace-separated token.
    pub fn matches_pinned(&self, reported: &str) -> bool {
        reported
            .split_whitespace()
            .any(|token| token == self.version)
    }
}
