//! Data models and structures for readmegen

pub mod analysis;
pub mod config;
pub mod rules;

pub use analysis::{AnalysisRecord, Dependencies, LicenseType, RecordBuilder};
pub use config::{OutputFormat, PartialSettings, ReportFormat, Settings};
pub use rules::ScanRules;
