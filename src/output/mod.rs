//! Output formatting and writing functionality

mod formatters;
pub mod plain_text;
mod progress;
pub mod prompt;
mod writers;

pub use self::plain_text::markdown_to_text;
pub use self::progress::ProgressReporter;
pub use self::prompt::{build_prompt, system_instruction};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::{AnalysisRecord, ReportFormat};

/// Trait for analysis report formatters
pub trait Formatter {
    /// Format an analysis record into a string
    fn format(&self, record: &AnalysisRecord) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &AnalysisRecord) -> Result<String> {
        if self.quiet {
            return Ok(formatters::format_record_summary(record));
        }
        Ok(formatters::format_record_text(
            record,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &AnalysisRecord) -> Result<String> {
        let mut json = formatters::format_record_json(record)?;
        json.push('\n');
        Ok(json)
    }
}

/// Create a formatter for the report format
pub fn create_formatter(
    format: ReportFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        ReportFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        ReportFormat::Json => Box::new(JsonFormatter),
    }
}
