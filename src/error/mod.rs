//! Error handling for readmegen
//!
//! This module provides the crate-wide error type, its severity model, and
//! helpers for attaching context to foreign errors.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, ReadmeGenError, Result};
