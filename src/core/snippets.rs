//! Bounded capture of leading code-file content

use crate::core::observer::ScanObserver;
use crate::core::walker::FileEntry;
use crate::models::{RecordBuilder, ScanRules};
use crate::utils::encoding::read_file_safely;

/// Captures snippets while the quota lasts
pub struct SnippetCollector<'a> {
    rules: &'a ScanRules,
}

impl<'a> SnippetCollector<'a> {
    pub fn new(rules: &'a ScanRules) -> Self {
        Self { rules }
    }

    /// Whether `file` should be read: code extension, under the size
    /// ceiling, and the quota not yet full, checked in that order
    pub fn is_eligible(&self, file: &FileEntry, extension: &str, builder: &RecordBuilder) -> bool {
        self.rules.is_code_extension(extension)
            && file
                .size
                .is_some_and(|size| size < self.rules.max_snippet_file_size())
            && builder.wants_snippet()
    }

    /// Read `file` and store its leading content under `relative`.
    /// Returns whether a snippet was stored.
    pub fn collect(
        &self,
        builder: &mut RecordBuilder,
        file: &FileEntry,
        relative: &str,
        extension: &str,
        observer: &dyn ScanObserver,
    ) -> bool {
        if !self.is_eligible(file, extension, builder) {
            return false;
        }

        match read_file_safely(&file.path) {
            Ok(content) if !content.is_empty() => builder.add_snippet(relative, &content),
            Ok(_) => false,
            Err(err) => {
                observer.on_warning(&file.path, &err);
                false
            }
        }
    }
}
