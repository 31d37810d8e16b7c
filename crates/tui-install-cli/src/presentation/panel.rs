//! Bordered text panels for the banner and completion summary.

use console::{measure_text_width, style};
use tui_install_core::BuildConfig;

pub const FRAMEWORK_REPOSITORY: &str = "https://github.com/entrepeneur4lyf/tui-framework.git";
pub const EXAMPLE_COMMAND: &str =
    "cd tui-framework && cargo run --example backend_test --features notcurses";

/// Draw `lines` inside a rounded box sized to the widest line.
///
/// Width is measured without ANSI escapes, so styled lines stay aligned.
pub fn render_panel<S: AsRef<str>>(lines: &[S]) -> String {
    let width = lines
        .iter()
        .map(|line| measure_text_width(line.as_ref()))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(width + 2);

    let mut out = format!("╭{rule}╮\n");
    for line in lines {
        let line = line.as_ref();
        let pad = " ".repeat(width - measure_text_width(line));
        out.push_str(&format!("│ {line}{pad} │\n"));
    }
    out.push_str(&format!("╰{rule}╯"));
    out
}

pub fn banner(config: &BuildConfig) -> String {
    render_panel(&[
        style("TUI Framework Installer").bold().blue().to_string(),
        format!("Installing notcurses {} and dependencies...", config.version),
    ])
}

/// Completion summary with the next steps for trying the framework.
pub fn completion() -> String {
    render_panel(&[
        style("Installation Complete!").bold().green().to_string(),
        String::new(),
        "Next steps:".to_string(),
        "1. Clone the TUI Framework:".to_string(),
        format!("   {}", style(format!("git clone {FRAMEWORK_REPOSITORY}")).cyan()),
        "2. Test the framework:".to_string(),
        format!("   {}", style(EXAMPLE_COMMAND).cyan()),
    ])
}

/// Lines listing the platforms the installer knows how to handle.
pub fn supported_platforms() -> String {
    [
        "Supported platforms:",
        "  - Linux: Ubuntu, Fedora, Arch",
        "  - macOS with Homebrew",
        "  - Windows with MSYS2",
    ]
    .join("\n")
}
