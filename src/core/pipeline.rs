//! README generation pipeline
//!
//! scan → prompt → generate → (plain-text conversion) → write

use crate::backend::TextGenerator;
use crate::core::analyzer::Analyzer;
use crate::core::observer::ScanObserver;
use crate::error::Result;
use crate::models::{AnalysisRecord, OutputFormat, Settings};
use crate::output::{build_prompt, markdown_to_text, FileWriter, OutputWriter};
use std::path::PathBuf;

/// Generates and writes a README for one project
pub struct ReadmeGenerator<G> {
    analyzer: Analyzer,
    generator: G,
}

impl<G: TextGenerator> ReadmeGenerator<G> {
    pub fn new(analyzer: Analyzer, generator: G) -> Self {
        Self {
            analyzer,
            generator,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Scan the configured project
    pub fn analyze(&self, settings: &Settings, observer: &dyn ScanObserver) -> Result<AnalysisRecord> {
        self.analyzer.scan(&settings.scan_path, observer)
    }

    /// Produce the final document for an analysis
    pub fn render(&self, record: &AnalysisRecord, format: OutputFormat) -> Result<String> {
        let prompt = build_prompt(record, format)?;
        tracing::info!(backend = self.generator.name(), %format, "generating README");
        let document = self.generator.generate(&prompt, format)?;

        Ok(match format {
            OutputFormat::Markdown => document,
            OutputFormat::Text => markdown_to_text(&document),
        })
    }

    /// Run the whole pipeline and return the path written
    pub fn run(&self, settings: &Settings, observer: &dyn ScanObserver) -> Result<PathBuf> {
        let record = self.analyze(settings, observer)?;
        let document = self.render(&record, settings.output_format)?;

        let path = settings.scan_path.join(settings.resolved_output_file());
        FileWriter::new(&path).write(&document)?;
        tracing::info!(path = %path.display(), bytes = document.len(), "README written");

        Ok(path)
    }
}
