//! Core project analysis and README generation

pub mod analyzer;
pub mod classifier;
pub mod dependencies;
pub mod heuristics;
pub mod observer;
pub mod pipeline;
pub mod snippets;
pub mod walker;

pub use analyzer::Analyzer;
pub use observer::{NullObserver, ScanObserver, TracingObserver};
pub use pipeline::ReadmeGenerator;
pub use walker::Walker;
