//! Package.json parsing functionality
//!
//! Extracts the `dependencies` and `devDependencies` objects of a package
//! manifest into one name-to-version mapping.

use crate::error::{ReadmeGenError, Result};
use crate::models::Dependencies;
use serde_json::{Map, Value};
use std::path::Path;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content; `devDependencies` win over `dependencies`
    pub fn parse(content: &str, path: &Path) -> Result<Dependencies> {
        let json_value: Value =
            serde_json::from_str(content).map_err(|e| ReadmeGenError::json_parse_error(path, e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(ReadmeGenError::invalid_manifest(
                    path,
                    "Root value is not an object",
                ));
            }
        };

        let mut deps = Dependencies::new();
        Self::merge_section(&obj, "dependencies", &mut deps, path)?;
        Self::merge_section(&obj, "devDependencies", &mut deps, path)?;

        Ok(deps)
    }

    /// Merge one dependency object into `deps`
    fn merge_section(
        obj: &Map<String, Value>,
        field: &str,
        deps: &mut Dependencies,
        path: &Path,
    ) -> Result<()> {
        match obj.get(field) {
            None => Ok(()),
            Some(Value::Object(section)) => {
                for (name, version) in section {
                    deps.insert(name.clone(), Self::version_string(version));
                }
                Ok(())
            }
            Some(_) => Err(ReadmeGenError::invalid_manifest(
                path,
                format!("Field '{}' is not an object", field),
            )),
        }
    }

    /// Version specs are normally strings; anything else is kept as its JSON text
    fn version_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Dependencies> {
        PackageJsonParser::parse(content, Path::new("package.json"))
    }

    #[test]
    fn test_dependencies_and_dev_dependencies() {
        let deps = parse(
            r#"{
                "name": "web-app",
                "dependencies": { "react": "^18.2.0", "lodash": "^4.17.21" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(deps.len(), 3);
        assert_eq!(deps["react"], "^18.2.0");
        assert_eq!(deps["jest"], "^29.0.0");
    }

    #[test]
    fn test_dev_dependencies_overwrite() {
        let deps = parse(
            r#"{
                "dependencies": { "typescript": "^4.0.0" },
                "devDependencies": { "typescript": "^5.3.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(deps["typescript"], "^5.3.0");
    }

    #[test]
    fn test_missing_sections() {
        assert!(parse(r#"{ "name": "bare" }"#).unwrap().is_empty());
    }

    #[test]
    fn test_non_string_version_kept_as_json() {
        let deps = parse(r#"{ "dependencies": { "odd": 3 } }"#).unwrap();
        assert_eq!(deps["odd"], "3");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(parse("{ not json"), Err(ReadmeGenError::JsonParse { .. })));
        assert!(matches!(parse("[1, 2]"), Err(ReadmeGenError::InvalidManifest { .. })));
        assert!(matches!(
            parse(r#"{ "dependencies": ["react"] }"#),
            Err(ReadmeGenError::InvalidManifest { .. })
        ));
    }
}
