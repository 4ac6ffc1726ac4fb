//! Document generation backends
//!
//! A backend turns an analysis prompt into README text. The analysis engine
//! knows nothing about backends; the pipeline hands them the finished prompt.

pub mod command;

pub use command::CommandGenerator;

use crate::error::Result;
use crate::models::OutputFormat;

/// Turns a prompt into a generated document
pub trait TextGenerator {
    /// Generate a document for `prompt` in the requested format
    fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String> {
        (**self).generate(prompt, format)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
