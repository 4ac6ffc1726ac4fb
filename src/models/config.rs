//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for readmegen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Project directory to analyze
    pub scan_path: PathBuf,

    /// Format of the generated document (markdown, text)
    pub output_format: OutputFormat,

    /// Output filename, relative to the scan path. Derived from the format when unset.
    pub output_file: Option<PathBuf>,

    /// External program that turns a prompt into a document
    pub backend_command: Option<String>,

    /// Format used by `--analyze-only` reports
    pub report_format: ReportFormat,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress spinner
    pub show_progress: bool,
}

impl Settings {
    /// Output filename, falling back to the format's conventional name
    pub fn resolved_output_file(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.output_format.default_file_name()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            output_format: OutputFormat::Markdown,
            output_file: None,
            backend_command: None,
            report_format: ReportFormat::Text,
            quiet: false,
            verbose: false,
            follow_links: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Format of the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown as returned by the backend
    Markdown,
    /// Markdown converted to plain text
    Text,
}

impl OutputFormat {
    /// Conventional output filename for this format
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "README.md",
            OutputFormat::Text => "readme.txt",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub backend_command: Option<String>,
    pub report_format: Option<ReportFormat>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub follow_links: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.backend_command.is_some() {
            self.backend_command = other.backend_command;
        }
        if other.report_format.is_some() {
            self.report_format = other.report_format;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(backend_command) = &self.backend_command {
            settings.backend_command = Some(backend_command.clone());
        }
        if let Some(report_format) = self.report_format {
            settings.report_format = report_format;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
