//! Project analysis
//!
//! Drives the walker over a project directory and folds every visited file
//! into an `AnalysisRecord`.

use crate::core::classifier::FileClassifier;
use crate::core::dependencies::DependencyExtractor;
use crate::core::heuristics;
use crate::core::observer::ScanObserver;
use crate::core::snippets::SnippetCollector;
use crate::core::walker::Walker;
use crate::error::{ReadmeGenError, Result};
use crate::models::{AnalysisRecord, RecordBuilder, ScanRules, Settings};
use crate::utils::paths::{file_name_of, relative_display};
use std::path::Path;

/// Project analyzer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rules: ScanRules,
    follow_links: bool,
}

impl Analyzer {
    /// Create an analyzer with the given rule set
    pub fn new(rules: ScanRules) -> Self {
        Self {
            rules,
            follow_links: false,
        }
    }

    /// Create an analyzer configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ScanRules::default()).follow_links(settings.follow_links)
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn rules(&self) -> &ScanRules {
        &self.rules
    }

    /// Scan `root` and summarize it.
    ///
    /// Only an unusable root is an error. Everything that goes wrong with an
    /// individual file is reported to `observer` and the scan continues.
    pub fn scan(&self, root: &Path, observer: &dyn ScanObserver) -> Result<AnalysisRecord> {
        let root = root
            .canonicalize()
            .map_err(|source| ReadmeGenError::scan_root_error(root, source))?;

        let project_name = file_name_of(&root);
        tracing::info!(project = %project_name, path = %root.display(), "analyzing project");

        let mut builder = RecordBuilder::new(
            project_name,
            self.rules.max_snippets(),
            self.rules.max_snippet_chars(),
        );
        let classifier = FileClassifier::new(&self.rules);
        let snippets = SnippetCollector::new(&self.rules);
        let mut manifests = DependencyExtractor::new();
        let mut files_seen = 0usize;

        let groups = Walker::new(&root, &self.rules)
            .follow_links(self.follow_links)
            .walk(observer)?;

        for group in &groups {
            if !group.relative.as_os_str().is_empty() {
                builder.add_directory(group.relative.to_string_lossy());
            }

            for file in &group.files {
                let relative = relative_display(&root, &file.path);
                let class = classifier.classify(&file.name, &file.path);

                builder.add_file(&class.extension);
                files_seen += 1;
                observer.on_file(&relative, files_seen);

                if class.is_config {
                    builder.add_config_file(file.name.clone(), relative.clone());
                    if let Some(kind) = class.manifest {
                        manifests.push(kind, &file.path);
                    }
                }

                heuristics::apply(&mut builder, &file.name, &file.path, observer);
                snippets.collect(&mut builder, file, &relative, &class.extension, observer);
            }
        }

        manifests.merge_into(&mut builder, observer);
        let record = builder.finish();

        tracing::info!(
            total_files = record.total_files(),
            directories = record.directory_structure().len(),
            dependencies = record.dependencies().len(),
            "analysis complete"
        );
        Ok(record)
    }
}
