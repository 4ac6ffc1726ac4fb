//! Parsing functionality for dependency manifests
//!
//! Each supported manifest format has its own parser; `ManifestKind` picks
//! one from a config filename.

pub mod package_json;
pub mod pyproject;
pub mod requirements;

pub use package_json::PackageJsonParser;
pub use pyproject::PyprojectParser;
pub use requirements::RequirementsParser;

use crate::error::Result;
use crate::models::Dependencies;
use std::path::Path;

/// Version recorded when a manifest does not pin one
pub const LATEST: &str = "latest";

/// Manifest formats that dependencies are extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestKind {
    /// package.json
    PackageJson,
    /// requirements.txt
    Requirements,
    /// pyproject.toml
    Pyproject,
}

impl ManifestKind {
    /// Manifest kind for a filename, ignoring case
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "package.json" => Some(ManifestKind::PackageJson),
            "requirements.txt" => Some(ManifestKind::Requirements),
            "pyproject.toml" => Some(ManifestKind::Pyproject),
            _ => None,
        }
    }

    /// Parse manifest content of this kind
    pub fn parse(&self, content: &str, path: &Path) -> Result<Dependencies> {
        match self {
            ManifestKind::PackageJson => PackageJsonParser::parse(content, path),
            ManifestKind::Requirements => Ok(RequirementsParser::parse(content)),
            ManifestKind::Pyproject => PyprojectParser::parse(content, path),
        }
    }
}
