//! CLI adapter for tui-install.
//!
//! `main.rs` is the composition root: it parses flags, initialises logging,
//! wires the real runner/probe/console through [`bootstrap`], and hands the
//! resulting [`CliContext`] to the install handler.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::CliError;
pub use handlers::install::{Completion, InstallArgs};
pub use parser::Cli;
