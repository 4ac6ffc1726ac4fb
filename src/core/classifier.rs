//! Per-file classification
//!
//! Tags each visited file with its extension, whether it is a recognized
//! config file (and which manifest parser applies), and whether its
//! extension makes it a snippet candidate.

use crate::models::ScanRules;
use crate::parsers::ManifestKind;
use crate::utils::paths::extension_of;
use std::path::Path;

/// Classification result for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileClass {
    /// Lowercased extension with leading dot, or empty
    pub extension: String,
    pub is_config: bool,
    /// Parser to extract dependencies with, for config files that carry them
    pub manifest: Option<ManifestKind>,
    pub is_code: bool,
}

/// Classifies files against a fixed rule set
pub struct FileClassifier<'a> {
    rules: &'a ScanRules,
}

impl<'a> FileClassifier<'a> {
    pub fn new(rules: &'a ScanRules) -> Self {
        Self { rules }
    }

    pub fn classify(&self, name: &str, path: &Path) -> FileClass {
        let extension = extension_of(path);
        let is_config = self.rules.is_config_file(name);
        let manifest = if is_config {
            ManifestKind::from_file_name(name)
        } else {
            None
        };
        let is_code = self.rules.is_code_extension(&extension);

        FileClass {
            extension,
            is_config,
            manifest,
            is_code,
        }
    }
}
