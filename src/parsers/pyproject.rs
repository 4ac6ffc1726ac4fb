//! pyproject.toml parsing functionality
//!
//! Only the PEP 621 `project.dependencies` array is read.

use super::LATEST;
use crate::error::{ReadmeGenError, Result};
use crate::models::Dependencies;
use std::path::Path;
use toml::Value;

/// Parser for pyproject.toml files
pub struct PyprojectParser;

impl PyprojectParser {
    /// Parse `project.dependencies`; a missing table or array is not an error
    pub fn parse(content: &str, path: &Path) -> Result<Dependencies> {
        let document: Value =
            toml::from_str(content).map_err(|e| ReadmeGenError::toml_parse_error(path, e))?;

        let mut deps = Dependencies::new();

        let Some(entries) = document
            .get("project")
            .and_then(|project| project.get("dependencies"))
        else {
            return Ok(deps);
        };

        let entries = entries.as_array().ok_or_else(|| {
            ReadmeGenError::invalid_manifest(path, "project.dependencies is not an array")
        })?;

        for entry in entries {
            let spec = entry.as_str().ok_or_else(|| {
                ReadmeGenError::invalid_manifest(
                    path,
                    format!("Dependency entry {} is not a string", entry),
                )
            })?;

            match spec.split_once("==") {
                Some((name, version)) => {
                    deps.insert(name.trim().to_string(), version.trim().to_string());
                }
                None => {
                    deps.insert(spec.trim().to_string(), LATEST.to_string());
                }
            }
        }

        Ok(deps)
    }
}
