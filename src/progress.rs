// src/progress.rs
use std::path::Path;

use crate::error::Error;

/// Lightweight progress reporting for page export.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to write.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page was written.
    fn item_done(&mut self, _name: &str, _path: &Path) {}

    /// One page could not be written; the batch carries on.
    fn item_failed(&mut self, _name: &str, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
