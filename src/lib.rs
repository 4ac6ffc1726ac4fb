//! readmegen - project analysis and README generation
//!
//! Scans a project directory into an `AnalysisRecord` (file types, config
//! files, dependencies, tests, docs, license and a few code snippets), renders
//! it as a prompt for a text generation backend, and optionally converts the
//! generated markdown to plain text.

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use backend::{CommandGenerator, TextGenerator};
pub use core::{Analyzer, NullObserver, ReadmeGenerator, ScanObserver, TracingObserver};
pub use error::{ErrorSeverity, ReadmeGenError, Result, ResultExt};
pub use models::{AnalysisRecord, LicenseType, OutputFormat, ScanRules, Settings};
pub use output::{build_prompt, markdown_to_text};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
