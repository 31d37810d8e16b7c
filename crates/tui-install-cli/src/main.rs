//! CLI entry point - the composition root.

use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tui_install_cli::{Cli, CliConfig, bootstrap, handlers};

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let ctx = bootstrap(CliConfig::with_defaults());
    debug!(os = %ctx.os, "Starting installer");

    match handlers::install::execute(&ctx, cli.install_args()) {
        Ok(completion) => {
            debug!(?completion, "Installer finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(error = %e, "Installer failed");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
