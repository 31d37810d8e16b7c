//! Output sink for user-facing status messages.
//!
//! The installer never prints directly. Every stage receives a sink, so the
//! CLI can render coloured lines and spinners while tests capture the exact
//! sequence of messages.

/// Category of a status line. Sinks decide how each one is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Work in progress ("Configuring build...").
    Progress,
    /// Neutral positive information ("Detected platform: ...").
    Notice,
    /// A stage completed.
    Success,
    /// A fatal failure.
    Error,
    /// Unstyled text (panels, lists).
    Plain,
}

/// Receives status output from the installer.
pub trait OutputSink: Send + Sync {
    /// Emit one status line.
    fn emit(&self, status: Status, message: &str);

    /// A long-running task starts. Sinks may show a spinner until `finish_task`.
    fn start_task(&self, message: &str);

    /// The current long-running task ended, successfully or not.
    fn finish_task(&self);

    /// Run `work` with any task indicator hidden, so a command can prompt on
    /// the terminal undisturbed.
    fn suspend(&self, work: &mut dyn FnMut()) {
        work();
    }

    fn progress(&self, message: &str) {
        self.emit(Status::Progress, message);
    }

    fn notice(&self, message: &str) {
        self.emit(Status::Notice, message);
    }

    fn success(&self, message: &str) {
        self.emit(Status::Success, message);
    }

    fn error(&self, message: &str) {
        self.emit(Status::Error, message);
    }

    fn plain(&self, message: &str) {
        self.emit(Status::Plain, message);
    }
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl OutputSink for NoopSink {
    fn emit(&self, _status: Status, _message: &str) {}
    fn start_task(&self, _message: &str) {}
    fn finish_task(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Sink {}
        impl OutputSink for Sink {
            fn emit(&self, status: Status, message: &str);
            fn start_task(&self, message: &str);
            fn finish_task(&self);
        }
    }

    #[test]
    fn test_helpers_route_to_emit() {
        let mut sink = MockSink::new();
        sink.expect_emit()
            .withf(|status, message| *status == Status::Success && message == "done")
            .times(1)
            .return_const(());
        sink.expect_emit()
            .withf(|status, message| *status == Status::Error && message == "broken")
            .times(1)
            .return_const(());
        sink.expect_emit()
            .with(eq(Status::Progress), mockall::predicate::always())
            .times(1)
            .return_const(());

        sink.success("done");
        sink.error("broken");
        sink.progress("working");
    }

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoopSink;
        sink.start_task("Building");
        sink.progress("Configuring");
        sink.finish_task();
    }

    #[test]
    fn test_default_suspend_runs_work_once() {
        let mut runs = 0;
        NoopSink.suspend(&mut || runs += 1);
        assert_eq!(runs, 1);
    }
}
