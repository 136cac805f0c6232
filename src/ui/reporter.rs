//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and status without being
//! coupled to a specific terminal implementation.

pub trait Reporter: Send + Sync {
    /// Indicates a new section or phase has started (e.g. "Fetching").
    fn section(&self, title: &str);

    /// Updates the progress of a download. `total` is absent when the remote
    /// response declared no length; callers then see raw bytes loaded.
    fn downloading(&self, name: &str, version: &str, current: u64, total: Option<u64>);

    /// Marks a package operation as successfully completed.
    fn done(&self, name: &str, version: &str, detail: &str);

    /// Marks a package operation as failed with a visible reason.
    fn failed(&self, name: &str, version: &str, reason: &str);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);

    /// Display a final summary of the run.
    fn summary(&self, count: usize, action: &str, elapsed_secs: f64);
}

/// Reporter that swallows everything; used in tests and quiet contexts.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn section(&self, _title: &str) {}
    fn downloading(&self, _name: &str, _version: &str, _current: u64, _total: Option<u64>) {}
    fn done(&self, _name: &str, _version: &str, _detail: &str) {}
    fn failed(&self, _name: &str, _version: &str, _reason: &str) {}
    fn info(&self, _msg: &str) {}
    fn warning(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn summary(&self, _count: usize, _action: &str, _elapsed_secs: f64) {}
}
