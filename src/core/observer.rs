//! Scan observation
//!
//! The scan itself never prints. Progress and recoverable per-file failures
//! are reported to a `ScanObserver` supplied by the caller.

use crate::error::ReadmeGenError;
use std::path::Path;

/// Receiver for scan progress and non-fatal problems
pub trait ScanObserver {
    /// A directory was entered; `relative` is empty for the scan root
    fn on_directory(&self, _relative: &str) {}

    /// A file was visited; `files_seen` includes this one
    fn on_file(&self, _relative: &str, _files_seen: usize) {}

    /// A per-file operation failed and was skipped
    fn on_warning(&self, path: &Path, error: &ReadmeGenError);
}

/// Observer that forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_directory(&self, relative: &str) {
        tracing::trace!(directory = relative, "entering directory");
    }

    fn on_file(&self, relative: &str, files_seen: usize) {
        tracing::trace!(file = relative, files_seen, "visiting file");
    }

    fn on_warning(&self, path: &Path, error: &ReadmeGenError) {
        tracing::warn!(path = %path.display(), severity = %error.severity(), "{}", error.user_message());
    }
}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_warning(&self, _path: &Path, _error: &ReadmeGenError) {}
}
