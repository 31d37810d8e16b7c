//! Port definitions (traits) for the installer's side effects.
//!
//! Ports define the interfaces the installer needs from the outside world
//! without tying the domain to process spawning, `PATH` lookup, or terminal
//! output. Implementations live in `tui-install-runtime` and
//! `tui-install-cli`; tests use the scripted doubles in `test_utils`.

mod command_runner;
mod executable_probe;
mod output_sink;

pub use command_runner::{CommandResult, CommandRunner, may_prompt};
pub use executable_probe::ExecutableProbe;
pub use output_sink::{NoopSink, OutputSink, Status};
