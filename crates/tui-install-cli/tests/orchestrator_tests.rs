//! End-to-end runs of the install pipeline against scripted ports.

use std::sync::Arc;

use tui_install_cli::{CliContext, CliError, Completion, InstallArgs, handlers};
use tui_install_core::test_utils::{RecordingSink, ScriptedRunner, StaticProbe};
use tui_install_core::{BuildConfig, BuildStage, CommandResult, OsKind, Status};

const VERSION_QUERY: &str = "pkg-config --modversion notcurses";

struct Harness {
    runner: Arc<ScriptedRunner>,
    sink: Arc<RecordingSink>,
    ctx: CliContext,
}

fn harness(os: OsKind, executables: &[&str], runner: ScriptedRunner) -> Harness {
    let runner = Arc::new(runner);
    let sink = Arc::new(RecordingSink::new());
    let ctx = CliContext {
        runner: runner.clone(),
        probe: Arc::new(StaticProbe::with(executables)),
        sink: sink.clone(),
        os,
        build: BuildConfig::default(),
    };
    Harness { runner, sink, ctx }
}

fn ubuntu(runner: ScriptedRunner) -> Harness {
    harness(OsKind::Linux, &["apt-get"], runner)
}

const fn args(skip_deps: bool, skip_build: bool, test: bool) -> InstallArgs {
    InstallArgs {
        skip_deps,
        skip_build,
        test,
    }
}

#[test]
fn unknown_platform_exits_before_any_command() {
    let h = harness(OsKind::Other("plan9".into()), &[], ScriptedRunner::new());

    let err = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap_err();

    assert!(matches!(err, CliError::UnsupportedPlatform(ref os) if os == "plan9"));
    assert_eq!(err.exit_code(), 1);
    assert!(h.runner.commands().is_empty());
    assert!(h.sink.contains(Status::Notice, "Detected platform: unknown (unknown)"));
    assert!(h.sink.contains(Status::Error, "Unsupported platform detected"));
    assert!(h.sink.contains(Status::Plain, "Supported platforms:"));
}

#[test]
fn generic_linux_fails_at_dependency_lookup() {
    let h = harness(OsKind::Linux, &["zypper"], ScriptedRunner::new());

    let err = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap_err();

    assert!(matches!(err, CliError::Dependencies(_)));
    assert!(h.sink.contains(Status::Notice, "Detected platform: linux (unknown)"));
    assert!(h.sink.contains(Status::Error, "Unsupported platform: linux"));
    assert_eq!(h.runner.commands(), vec![VERSION_QUERY.to_string()]);
}

#[test]
fn pinned_version_present_returns_early() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::ok("3.0.11\n")));

    let completion = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap();

    assert_eq!(completion, Completion::AlreadyInstalled);
    assert_eq!(h.runner.commands(), vec![VERSION_QUERY.to_string()]);
    assert!(h.sink.contains(Status::Success, "notcurses 3.0.11 already installed"));
    assert!(!h.sink.contains(Status::Plain, "Next steps:"));
}

#[test]
fn verify_only_run_skips_install_and_build() {
    let h = ubuntu(
        ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::ok("notcurses 3.0.11")),
    );

    let completion = handlers::install::execute(&h.ctx, args(true, true, true)).unwrap();

    assert_eq!(completion, Completion::Installed);
    assert!(h.runner.commands().iter().all(|c| c == VERSION_QUERY));
    assert!(!h.runner.ran("sudo apt-get"));
    assert!(!h.runner.ran("git clone"));
    assert!(h.sink.contains(Status::Success, "notcurses 3.0.11 detected"));
    assert!(h.sink.contains(Status::Plain, "Next steps:"));
}

#[test]
fn full_ubuntu_install_runs_every_stage() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::failed("not found")));

    let completion = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap();

    assert_eq!(completion, Completion::Installed);
    let commands = h.runner.commands();
    let position = |prefix: &str| {
        commands
            .iter()
            .position(|c| c.starts_with(prefix))
            .unwrap_or_else(|| panic!("{prefix} not run: {commands:?}"))
    };
    assert!(position("sudo apt-get update") < position("git clone"));
    assert!(position("git clone") < position("git checkout v3.0.11"));
    assert!(position("cmake ..") < position("make -j"));
    assert!(position("sudo make install") < position("sudo ldconfig"));

    assert_eq!(
        h.sink.tasks(),
        vec![
            "Installing dependencies...".to_string(),
            "Building notcurses 3.0.11...".to_string()
        ]
    );
    assert!(h.sink.contains(Status::Success, "Dependencies installed successfully"));
    assert!(h.sink.contains(Status::Success, "notcurses 3.0.11 installed successfully"));
    assert!(h.sink.messages(Status::Error).is_empty());
    assert_eq!(h.sink.suspensions(), 3);
}

#[test]
fn dependency_failure_stops_before_build() {
    let h = ubuntu(
        ScriptedRunner::new().respond("sudo apt-get", CommandResult::failed("E: Unable to locate package")),
    );

    let err = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap_err();

    assert!(matches!(err, CliError::Dependencies(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(!h.runner.ran("git clone"));
    assert!(h.sink.contains(
        Status::Error,
        "Failed to install dependencies: E: Unable to locate package"
    ));
}

#[test]
fn compile_failure_skips_install_and_refresh() {
    let h = ubuntu(
        ScriptedRunner::new().respond("make -j", CommandResult::failed("error: foo.c:12")),
    );

    let err = handlers::install::execute(&h.ctx, args(true, false, false)).unwrap_err();

    assert!(matches!(err, CliError::Build(ref e) if e.stage() == BuildStage::Compile));
    assert_eq!(err.exit_code(), 1);
    assert!(!h.runner.ran("sudo make install"));
    assert!(!h.runner.ran("sudo ldconfig"));
    assert!(h.sink.contains(Status::Error, "Failed to build notcurses: error: foo.c:12"));
    assert!(!h.sink.contains(Status::Plain, "Next steps:"));
}

#[test]
fn arch_installs_package_without_source_build() {
    let h = harness(OsKind::Linux, &["pacman"], ScriptedRunner::new());

    let completion = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap();

    assert_eq!(completion, Completion::Installed);
    assert!(h.runner.ran("yay -S notcurses"));
    assert!(!h.runner.ran("git clone"));
    assert!(h.sink.contains(Status::Notice, "skipping source build"));
}

#[test]
fn macos_installs_with_brew_without_source_build() {
    let h = harness(OsKind::Darwin, &[], ScriptedRunner::new());

    handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap();

    assert!(h.runner.ran("brew install"));
    assert!(!h.runner.ran("git clone"));
    assert!(h.sink.contains(Status::Notice, "Detected platform: macos (brew)"));
}

#[test]
fn windows_msys2_is_rejected_by_installer() {
    let h = harness(OsKind::Windows, &["pacman"], ScriptedRunner::new());

    let err = handlers::install::execute(&h.ctx, InstallArgs::default()).unwrap_err();

    assert!(matches!(err, CliError::Dependencies(_)));
    assert!(h.sink.contains(Status::Error, "Unsupported platform: windows"));
    assert!(!h.runner.ran("sudo pacman"));
}

#[test]
fn verification_rejects_other_versions() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::ok("3.0.9")));

    let err = handlers::install::execute(&h.ctx, args(true, true, true)).unwrap_err();

    assert!(matches!(err, CliError::Verification(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(h.sink.contains(Status::Error, "expected notcurses 3.0.11, found 3.0.9"));
}

#[test]
fn verification_reports_missing_library() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::failed("")));

    let err = handlers::install::execute(&h.ctx, args(true, true, true)).unwrap_err();

    assert!(matches!(err, CliError::Verification(_)));
    assert!(h.sink.contains(Status::Error, "pkg-config could not find notcurses"));
}

#[test]
fn pinned_version_with_test_flag_runs_full_pipeline() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::ok("3.0.11")));

    let completion = handlers::install::execute(&h.ctx, args(false, false, true)).unwrap();

    assert_eq!(completion, Completion::Installed);
    assert!(h.sink.contains(Status::Success, "already installed"));
    assert!(h.runner.ran("sudo apt-get"));
    assert!(h.runner.ran("git clone"));
    assert!(h.sink.contains(Status::Success, "notcurses 3.0.11 detected"));
}

#[test]
fn lookalike_version_is_not_treated_as_installed() {
    let h = ubuntu(ScriptedRunner::new().respond(VERSION_QUERY, CommandResult::ok("3.0.110")));

    let err = handlers::install::execute(&h.ctx, args(false, false, true)).unwrap_err();

    assert!(matches!(err, CliError::Verification(_)));
    assert!(!h.sink.contains(Status::Success, "already installed"));
    assert!(h.runner.ran("sudo apt-get"));
    assert!(h.runner.ran("git clone"));
    assert!(h.sink.contains(Status::Error, "expected notcurses 3.0.11, found 3.0.110"));
}
