//! Observability handle threaded through the summary pipeline.
//!
//! Components report through a [`Reporter`] passed in by the caller instead
//! of a process-wide logger. The binary uses [`TracingReporter`]; tests use
//! [`RecordingReporter`] to assert on what was reported.

use std::cell::RefCell;

use tracing::{error, info, warn, Level};

/// Sink for informational, warning, and error messages.
pub trait Reporter {
    /// Reports an informational message.
    fn info(&self, message: &str);

    /// Reports a non-fatal condition.
    fn warn(&self, message: &str);

    /// Reports a fatal condition.
    fn error(&self, message: &str);
}

/// Reporter that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Reporter that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Recorded entries in emission order.
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    /// Creates an empty recording reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Returns the recorded messages at a given level.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Returns the recorded warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::WARN)
    }

    fn record(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::ERROR, message);
    }
}
