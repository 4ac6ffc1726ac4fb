//! Fixed classification rules for a project scan

use std::collections::HashSet;

/// Directory names that are never descended into, at any depth
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    ".vscode",
    ".idea",
    "venv",
    "env",
    ".env",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "coverage",
    ".coverage",
    ".pytest_cache",
    ".mypy_cache",
];

/// Filenames recognized as project configuration (matched case-insensitively)
pub const CONFIG_FILES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "Pipfile",
    "pyproject.toml",
    "Cargo.toml",
    "pom.xml",
    "build.gradle",
    "composer.json",
    "Gemfile",
    "go.mod",
    "Dockerfile",
    "docker-compose.yml",
    ".gitignore",
    "LICENSE",
    "MANIFEST.in",
    "setup.py",
    "setup.cfg",
];

/// Extensions whose leading content may be captured as a snippet
pub const CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".jsx", ".tsx", ".java", ".cpp", ".c", ".cs", ".php", ".rb", ".go",
    ".rs", ".swift", ".kt", ".scala", ".html", ".css", ".scss", ".sass", ".vue", ".svelte",
    ".r", ".m",
];

pub const MAX_SNIPPETS: usize = 5;
pub const MAX_SNIPPET_CHARS: usize = 1000;
pub const MAX_SNIPPET_FILE_SIZE: u64 = 50_000;

/// Immutable rule set handed to the walker, classifier and snippet collector
#[derive(Debug, Clone)]
pub struct ScanRules {
    ignored_dirs: HashSet<String>,
    // lowercased for case-insensitive lookup
    config_files: HashSet<String>,
    code_extensions: HashSet<String>,
    max_snippets: usize,
    max_snippet_chars: usize,
    max_snippet_file_size: u64,
}

impl ScanRules {
    /// Whether a directory with this exact name is pruned
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// Whether a filename is a recognized config file, ignoring case
    pub fn is_config_file(&self, name: &str) -> bool {
        self.config_files.contains(&name.to_lowercase())
    }

    /// Whether a lowercased extension (with leading dot) is snippet-eligible
    pub fn is_code_extension(&self, extension: &str) -> bool {
        self.code_extensions.contains(extension)
    }

    pub fn max_snippets(&self) -> usize {
        self.max_snippets
    }

    pub fn max_snippet_chars(&self) -> usize {
        self.max_snippet_chars
    }

    pub fn max_snippet_file_size(&self) -> u64 {
        self.max_snippet_file_size
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            ignored_dirs: IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            config_files: CONFIG_FILES.iter().map(|s| s.to_lowercase()).collect(),
            code_extensions: CODE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            max_snippets: MAX_SNIPPETS,
            max_snippet_chars: MAX_SNIPPET_CHARS,
            max_snippet_file_size: MAX_SNIPPET_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_dirs_match_exact_names_only() {
        let rules = ScanRules::default();
        assert!(rules.is_ignored_dir("node_modules"));
        assert!(rules.is_ignored_dir(".env"));
        assert!(!rules.is_ignored_dir("Node_Modules"));
        assert!(!rules.is_ignored_dir("environment"));
    }

    #[test]
    fn test_config_files_are_case_insensitive() {
        let rules = ScanRules::default();
        assert!(rules.is_config_file("Cargo.toml"));
        assert!(rules.is_config_file("cargo.toml"));
        assert!(rules.is_config_file("license"));
        assert!(rules.is_config_file("PIPFILE"));
        assert!(!rules.is_config_file("LICENSE.md"));
    }

    #[test]
    fn test_code_extensions() {
        let rules = ScanRules::default();
        assert!(rules.is_code_extension(".rs"));
        assert!(rules.is_code_extension(".r"));
        assert!(!rules.is_code_extension(".md"));
        assert!(!rules.is_code_extension("rs"));
    }

    #[test]
    fn test_limits() {
        let rules = ScanRules::default();
        assert_eq!(rules.max_snippets(), 5);
        assert_eq!(rules.max_snippet_chars(), 1000);
        assert_eq!(rules.max_snippet_file_size(), 50_000);
    }
}
