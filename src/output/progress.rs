//! Progress reporting functionality
//!
//! A spinner that follows the scan as a `ScanObserver`. Warnings are never
//! printed by the spinner itself; they go to `tracing` like everything else.

use crate::core::observer::{ScanObserver, TracingObserver};
use crate::error::ReadmeGenError;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::path::Path;
use std::time::Duration;

/// Spinner-based scan progress
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    warnings: Cell<usize>,
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` draws nothing
    pub fn new(enabled: bool) -> Self {
        let spinner = enabled.then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}") {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        Self {
            spinner,
            warnings: Cell::new(0),
        }
    }

    /// Set the spinner message
    pub fn set_message(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Number of warnings seen so far
    pub fn warning_count(&self) -> usize {
        self.warnings.get()
    }

    /// Stop the spinner and erase it
    pub fn clear(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl ScanObserver for ProgressReporter {
    fn on_directory(&self, relative: &str) {
        TracingObserver.on_directory(relative);
    }

    fn on_file(&self, relative: &str, files_seen: usize) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("{} files scanned: {}", files_seen, relative));
            spinner.set_position(files_seen as u64);
        }
        TracingObserver.on_file(relative, files_seen);
    }

    fn on_warning(&self, path: &Path, error: &ReadmeGenError) {
        self.warnings.set(self.warnings.get() + 1);
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| TracingObserver.on_warning(path, error)),
            None => TracingObserver.on_warning(path, error),
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(spinner) = &self.spinner {
            if !spinner.is_finished() {
                spinner.finish_and_clear();
            }
        }
    }
}
