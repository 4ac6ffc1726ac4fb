//! Analysis record structures
//!
//! `AnalysisRecord` is the finished, read-only summary of one scan.
//! `RecordBuilder` is the only way to produce one: it accumulates per-file
//! facts during traversal and derives the main language on `finish`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Package name to version (or `"latest"`), in merge order
pub type Dependencies = IndexMap<String, String>;

/// License family detected from a license file's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseType {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache 2.0")]
    Apache,
    #[serde(rename = "GPL")]
    Gpl,
    #[serde(rename = "BSD")]
    Bsd,
    /// A license file whose text matches no known family
    Custom,
    /// A license file that could not be read
    Unknown,
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Mit => "MIT",
            LicenseType::Apache => "Apache 2.0",
            LicenseType::Gpl => "GPL",
            LicenseType::Bsd => "BSD",
            LicenseType::Custom => "Custom",
            LicenseType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured summary of one project directory scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    project_name: String,
    directory_structure: Vec<String>,
    file_types: BTreeMap<String, usize>,
    config_files: IndexMap<String, String>,
    dependencies: Dependencies,
    code_snippets: IndexMap<String, String>,
    total_files: usize,
    main_language: Option<String>,
    has_tests: bool,
    has_docs: bool,
    license_type: Option<LicenseType>,
}

impl AnalysisRecord {
    /// Base name of the scanned root directory
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Relative subdirectory paths in traversal order
    pub fn directory_structure(&self) -> &[String] {
        &self.directory_structure
    }

    /// Lowercased extension (with leading dot, or empty) to occurrence count
    pub fn file_types(&self) -> &BTreeMap<String, usize> {
        &self.file_types
    }

    /// Recognized config filename to its relative path, in visit order
    pub fn config_files(&self) -> &IndexMap<String, String> {
        &self.config_files
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    /// Relative path to the leading content of a code file, in visit order
    pub fn code_snippets(&self) -> &IndexMap<String, String> {
        &self.code_snippets
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn main_language(&self) -> Option<&str> {
        self.main_language.as_deref()
    }

    pub fn has_tests(&self) -> bool {
        self.has_tests
    }

    pub fn has_docs(&self) -> bool {
        self.has_docs
    }

    pub fn license_type(&self) -> Option<LicenseType> {
        self.license_type
    }
}

/// Mutable accumulator for an `AnalysisRecord` under construction
#[derive(Debug)]
pub struct RecordBuilder {
    record: AnalysisRecord,
    max_snippets: usize,
    max_snippet_chars: usize,
}

impl RecordBuilder {
    /// Start an empty record for the named project
    pub fn new(project_name: impl Into<String>, max_snippets: usize, max_snippet_chars: usize) -> Self {
        Self {
            record: AnalysisRecord {
                project_name: project_name.into(),
                ..Default::default()
            },
            max_snippets,
            max_snippet_chars,
        }
    }

    pub fn add_directory(&mut self, relative: impl Into<String>) {
        self.record.directory_structure.push(relative.into());
    }

    /// Count one visited file under its extension
    pub fn add_file(&mut self, extension: &str) {
        self.record.total_files += 1;
        *self.record.file_types.entry(extension.to_string()).or_insert(0) += 1;
    }

    pub fn add_config_file(&mut self, name: impl Into<String>, relative: impl Into<String>) {
        self.record.config_files.insert(name.into(), relative.into());
    }

    /// Merge dependencies, overwriting existing entries with the same name
    pub fn merge_dependencies(&mut self, dependencies: Dependencies) {
        self.record.dependencies.extend(dependencies);
    }

    pub fn snippet_count(&self) -> usize {
        self.record.code_snippets.len()
    }

    /// Whether the snippet quota still has room
    pub fn wants_snippet(&self) -> bool {
        self.snippet_count() < self.max_snippets
    }

    /// Store the leading characters of `content`; returns false once the quota is full
    pub fn add_snippet(&mut self, relative: impl Into<String>, content: &str) -> bool {
        if !self.wants_snippet() {
            return false;
        }
        let snippet: String = content.chars().take(self.max_snippet_chars).collect();
        self.record.code_snippets.insert(relative.into(), snippet);
        true
    }

    pub fn mark_tests(&mut self) {
        self.record.has_tests = true;
    }

    pub fn mark_docs(&mut self) {
        self.record.has_docs = true;
    }

    pub fn set_license(&mut self, license: LicenseType) {
        self.record.license_type = Some(license);
    }

    /// Derive the main language and seal the record
    pub fn finish(mut self) -> AnalysisRecord {
        self.record.main_language = main_language(&self.record.file_types);
        self.record
    }
}

/// Extension with the highest count; ties go to the lexicographically smallest
fn main_language(file_types: &BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for (extension, &count) in file_types {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((extension, count));
        }
    }
    best.map(|(extension, _)| extension.clone())
}
