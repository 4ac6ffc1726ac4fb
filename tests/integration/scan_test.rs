//! End-to-end scans of fixture projects

use readmegen::{
    core::{Analyzer, NullObserver, ScanObserver},
    error::{ReadmeGenError, Result},
    models::LicenseType,
};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A small mixed Python/JavaScript project
fn create_mixed_project(root: &Path) -> Result<()> {
    write(root, "package.json", r#"{
        "name": "web",
        "dependencies": {"react": "^18.0.0", "shared": "1.0.0"},
        "devDependencies": {"jest": "^29.0.0"}
    }"#)?;
    write(root, "requirements.txt", "# runtime\nflask==2.0.1\n\nrequests>=2.0\nshared==2.0.0\n")?;
    write(root, "pyproject.toml", "[project]\nname = \"svc\"\ndependencies = [\"shared==3.0.0\", \"rich\"]\n")?;
    write(root, "app/main.py", "from flask import Flask\napp = Flask(__name__)\n")?;
    write(root, "app/utils.py", "def helper():\n    return 1\n")?;
    write(root, "web/index.js", "console.log('hi')\n")?;
    write(root, "web/App.test.js", "test('renders', () => {})\n")?;
    write(root, "docs/README.md", "# Guide\n")?;
    write(root, "LICENSE", "Apache License\nVersion 2.0, January 2004\n")?;
    write(root, "node_modules/react/index.js", "module.exports = {}\n")?;
    write(root, "app/__pycache__/main.cpython-311.pyc", "binary")?;
    write(root, ".git/HEAD", "ref: refs/heads/main\n")?;
    Ok(())
}

#[derive(Default)]
struct CountingObserver {
    warnings: RefCell<Vec<PathBuf>>,
    files: RefCell<usize>,
}

impl ScanObserver for CountingObserver {
    fn on_file(&self, _relative: &str, files_seen: usize) {
        *self.files.borrow_mut() = files_seen;
    }

    fn on_warning(&self, path: &Path, _error: &ReadmeGenError) {
        self.warnings.borrow_mut().push(path.to_path_buf());
    }
}

#[test]
fn test_mixed_project_record() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("mixed");
    create_mixed_project(&root)?;

    let observer = CountingObserver::default();
    let record = Analyzer::default().scan(&root, &observer)?;

    assert_eq!(record.project_name(), "mixed");
    assert_eq!(record.total_files(), 9);
    assert_eq!(*observer.files.borrow(), 9);
    assert!(observer.warnings.borrow().is_empty());
    assert_eq!(
        record.file_types().values().sum::<usize>(),
        record.total_files()
    );

    let directories: Vec<&str> = record.directory_structure().iter().map(String::as_str).collect();
    assert_eq!(directories, vec!["app", "docs", "web"]);

    assert_eq!(record.config_files().len(), 4);
    assert_eq!(record.config_files()["LICENSE"], "LICENSE");
    assert!(record.has_tests());
    assert!(record.has_docs());
    assert_eq!(record.license_type(), Some(LicenseType::Apache));
    assert_eq!(record.main_language(), Some(".js"));
    Ok(())
}

#[test]
fn test_dependency_merge_order() -> Result<()> {
    let dir = tempdir()?;
    create_mixed_project(dir.path())?;

    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;
    let deps = record.dependencies();

    assert_eq!(deps["react"], "^18.0.0");
    assert_eq!(deps["jest"], "^29.0.0");
    assert_eq!(deps["flask"], "2.0.1");
    assert_eq!(deps["requests"], "latest");
    assert_eq!(deps["rich"], "latest");
    // package.json, then requirements.txt, then pyproject.toml
    assert_eq!(deps["shared"], "3.0.0");
    assert_eq!(deps.len(), 6);
    Ok(())
}

#[test]
fn test_ignored_directories_only() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "node_modules/a/index.js", "x")?;
    write(dir.path(), "target/debug/app", "x")?;
    write(dir.path(), "venv/lib/site.py", "x")?;

    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;

    assert_eq!(record.total_files(), 0);
    assert!(record.file_types().is_empty());
    assert!(record.directory_structure().is_empty());
    assert_eq!(record.main_language(), None);
    Ok(())
}

#[test]
fn test_nested_ignored_directory_is_pruned() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "packages/ui/dist/bundle.js", "x")?;
    write(dir.path(), "packages/ui/src/button.tsx", "export {}")?;

    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;

    assert_eq!(record.total_files(), 1);
    assert!(record
        .directory_structure()
        .iter()
        .all(|d| !d.split(std::path::MAIN_SEPARATOR).any(|part| part == "dist")));
    Ok(())
}

#[test]
fn test_snippet_limits() -> Result<()> {
    let dir = tempdir()?;
    for i in 0..10 {
        write(dir.path(), &format!("src/mod{}.rs", i), &"fn f() {}\n".repeat(300))?;
    }
    write(dir.path(), "src/huge.rs", &"x".repeat(60_000))?;

    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;

    assert_eq!(record.code_snippets().len(), 5);
    assert!(record
        .code_snippets()
        .values()
        .all(|snippet| snippet.chars().count() <= 1000));
    assert!(!record.code_snippets().keys().any(|path| path.ends_with("huge.rs")));
    Ok(())
}

#[test]
fn test_license_families() -> Result<()> {
    let cases = [
        ("MIT License\nPermission is hereby granted", LicenseType::Mit),
        ("GNU GENERAL PUBLIC LICENSE\nSPDX-License-Identifier: GPL-3.0", LicenseType::Gpl),
        ("Copyright Example Corp. Proprietary.", LicenseType::Custom),
    ];

    for (text, expected) in cases {
        let dir = tempdir()?;
        write(dir.path(), "LICENSE.txt", text)?;
        let record = Analyzer::default().scan(dir.path(), &NullObserver)?;
        assert_eq!(record.license_type(), Some(expected), "license text: {}", text);
    }
    Ok(())
}

#[test]
fn test_has_tests_only_with_test_names() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "lib/core.py", "x = 1")?;
    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;
    assert!(!record.has_tests());

    write(dir.path(), "lib/core_spec.py", "x = 1")?;
    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;
    assert!(record.has_tests());
    Ok(())
}

#[test]
fn test_broken_manifest_does_not_abort_scan() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "package.json", "{ \"dependencies\": ")?;
    write(dir.path(), "requirements.txt", "numpy\n")?;

    let observer = CountingObserver::default();
    let record = Analyzer::default().scan(dir.path(), &observer)?;

    assert_eq!(observer.warnings.borrow().len(), 1);
    assert_eq!(record.dependencies().len(), 1);
    assert_eq!(record.total_files(), 2);
    Ok(())
}

#[test]
fn test_latin1_snippet_is_decoded() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("legacy.py"), b"# caf\xE9\n")?;

    let record = Analyzer::default().scan(dir.path(), &NullObserver)?;
    assert_eq!(record.code_snippets()["legacy.py"], "# café\n");
    Ok(())
}

#[test]
fn test_missing_root() {
    let result = Analyzer::default().scan(Path::new("/no/such/dir/anywhere"), &NullObserver);
    assert!(matches!(result, Err(ReadmeGenError::NotFound { .. })));
}
