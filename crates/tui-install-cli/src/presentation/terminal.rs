//! `OutputSink` backed by the terminal.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tui_install_core::{OutputSink, Status};

const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Format one status line with its colour and prefix.
pub fn render_status(status: Status, message: &str) -> String {
    match status {
        Status::Progress => style(message).blue().to_string(),
        Status::Notice => style(message).green().to_string(),
        Status::Success => style(format!("SUCCESS: {message}")).green().to_string(),
        Status::Error => style(format!("ERROR: {message}")).red().to_string(),
        Status::Plain => message.to_string(),
    }
}

/// Prints status lines to stdout and shows a spinner while a task runs.
///
/// Lines emitted while the spinner is active are printed above it so the
/// spinner stays on the last line.
pub struct ConsoleSink {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn guard(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&self, status: Status, message: &str) {
        let line = render_status(status, message);
        let guard = self.guard();
        match guard.as_ref() {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }

    fn start_task(&self, message: &str) {
        let mut guard = self.guard();
        if let Some(previous) = guard.take() {
            previous.finish_and_clear();
        }
        *guard = Some(Self::create_spinner(message));
    }

    fn finish_task(&self) {
        if let Some(pb) = self.guard().take() {
            pb.finish_and_clear();
        }
    }

    /// Hide the spinner while `work` runs so `sudo` can prompt cleanly.
    fn suspend(&self, work: &mut dyn FnMut()) {
        let spinner = self.guard().clone();
        match spinner {
            Some(pb) => pb.suspend(|| work()),
            None => work(),
        }
    }
}
