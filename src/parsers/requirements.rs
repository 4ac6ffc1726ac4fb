//! Line-oriented requirement list parsing (requirements.txt)

use super::LATEST;
use crate::models::Dependencies;

/// Parser for pip-style requirement lists
pub struct RequirementsParser;

impl RequirementsParser {
    /// Parse requirement lines. Pinned `name==version` entries keep their
    /// version, everything else is recorded as `latest`.
    pub fn parse(content: &str) -> Dependencies {
        let mut deps = Dependencies::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((name, version)) = line.split_once("==") {
                deps.insert(name.trim().to_string(), version.trim().to_string());
            } else if let Some((name, _)) = line.split_once(">=") {
                deps.insert(name.trim().to_string(), LATEST.to_string());
            } else {
                deps.insert(line.to_string(), LATEST.to_string());
            }
        }

        deps
    }
}
