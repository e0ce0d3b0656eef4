// src/progress.rs
/// Lightweight progress reporting for a run over the configured conferences.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of conferences to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One conference produced a row.
    fn item_done(&mut self, _label: &str) {}

    /// One conference was skipped.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
