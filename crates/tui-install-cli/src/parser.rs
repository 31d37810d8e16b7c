//! Command-line flags.

use clap::Parser;

use crate::handlers::install::InstallArgs;

/// Installs notcurses 3.0.11 and the TUI Framework's native dependencies.
#[derive(Debug, Parser)]
#[command(name = "tui-install")]
#[command(about = "Install TUI Framework and notcurses dependencies")]
#[command(version)]
pub struct Cli {
    /// Skip dependency installation
    #[arg(long)]
    pub skip_deps: bool,

    /// Skip building notcurses
    #[arg(long)]
    pub skip_build: bool,

    /// Test installation after completion
    #[arg(long)]
    pub test: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub const fn install_args(&self) -> InstallArgs {
        InstallArgs {
            skip_deps: self.skip_deps,
            skip_build: self.skip_build,
            test: self.test,
        }
    }
}
