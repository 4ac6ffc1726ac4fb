//! Pipeline runs against an in-process generator

use readmegen::{
    build_prompt,
    core::{Analyzer, NullObserver, ReadmeGenerator},
    error::{ReadmeGenError, Result},
    models::{OutputFormat, Settings},
    TextGenerator,
};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::tempdir;

/// Echoes a fixed document and remembers every prompt it was given
struct ScriptedGenerator {
    document: String,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedGenerator {
    fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            prompts: Rc::default(),
        }
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str, _format: OutputFormat) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.document.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn create_project(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("src"))?;
    fs::create_dir_all(root.join("tests"))?;
    fs::write(root.join("src/app.py"), "def main():\n    print('hello')\n")?;
    fs::write(root.join("tests/test_app.py"), "def test_main():\n    pass\n")?;
    fs::write(root.join("requirements.txt"), "click==8.1.7\n")?;
    fs::write(root.join("LICENSE"), "MIT License\n")?;
    Ok(())
}

fn settings_for(root: &Path, format: OutputFormat, output_file: Option<&str>) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        output_format: format,
        output_file: output_file.map(PathBuf::from),
        show_progress: false,
        ..Default::default()
    }
}

#[test]
fn test_markdown_readme_is_written_verbatim() -> Result<()> {
    let dir = tempdir()?;
    create_project(dir.path())?;
    let settings = settings_for(dir.path(), OutputFormat::Markdown, None);

    let generator = ScriptedGenerator::new("# App\n\nSays **hello**.\n");
    let pipeline = ReadmeGenerator::new(Analyzer::default(), generator);
    let path = pipeline.run(&settings, &NullObserver)?;

    assert_eq!(path, dir.path().join("README.md"));
    assert_eq!(fs::read_to_string(&path)?, "# App\n\nSays **hello**.\n");
    Ok(())
}

#[test]
fn test_prompt_sent_matches_build_prompt() -> Result<()> {
    let dir = tempdir()?;
    create_project(dir.path())?;
    let settings = settings_for(dir.path(), OutputFormat::Markdown, None);

    let generator = ScriptedGenerator::new("ok");
    let prompts = Rc::clone(&generator.prompts);
    let pipeline = ReadmeGenerator::new(Analyzer::default(), generator);
    let record = pipeline.analyze(&settings, &NullObserver)?;
    let expected = build_prompt(&record, OutputFormat::Markdown)?;
    let document = pipeline.render(&record, OutputFormat::Markdown)?;

    assert_eq!(document, "ok");
    assert_eq!(*prompts.borrow(), vec![expected.clone()]);
    assert!(expected.contains("- Has Tests: true"));
    assert!(expected.contains("- License: MIT"));
    assert!(expected.contains("\"click\": \"8.1.7\""));
    Ok(())
}

#[test]
fn test_text_readme_is_converted() -> Result<()> {
    let dir = tempdir()?;
    create_project(dir.path())?;
    let settings = settings_for(dir.path(), OutputFormat::Text, Some("ABOUT.txt"));

    let generator = ScriptedGenerator::new("# App\n\n- Says `hello`\n");
    let pipeline = ReadmeGenerator::new(Analyzer::default(), generator);
    let path = pipeline.run(&settings, &NullObserver)?;

    assert_eq!(path, dir.path().join("ABOUT.txt"));
    assert_eq!(fs::read_to_string(&path)?, "App\n• Says hello");
    Ok(())
}

#[test]
fn test_boxed_generator() -> Result<()> {
    let dir = tempdir()?;
    let settings = settings_for(dir.path(), OutputFormat::Markdown, None);

    let generator: Box<dyn TextGenerator> = Box::new(ScriptedGenerator::new("# Empty\n"));
    let pipeline = ReadmeGenerator::new(Analyzer::default(), generator);
    let path = pipeline.run(&settings, &NullObserver)?;

    assert_eq!(fs::read_to_string(path)?, "# Empty\n");
    Ok(())
}

#[test]
fn test_missing_project_fails_before_generation() {
    let generator = ScriptedGenerator::new("unused");
    let settings = settings_for(Path::new("/no/such/project"), OutputFormat::Markdown, None);

    let pipeline = ReadmeGenerator::new(Analyzer::default(), generator);
    let result = pipeline.run(&settings, &NullObserver);

    assert!(matches!(result, Err(ReadmeGenError::NotFound { .. })));
}

#[test]
fn test_prompt_samples_follow_visit_order() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("a"))?;
    fs::write(dir.path().join("a/b.py"), "AB")?;
    for name in ["z1", "z2", "z3"] {
        fs::write(dir.path().join(format!("{}.py", name)), name.to_uppercase())?;
    }
    let settings = settings_for(dir.path(), OutputFormat::Markdown, None);

    let pipeline = ReadmeGenerator::new(Analyzer::default(), ScriptedGenerator::new("ok"));
    let record = pipeline.analyze(&settings, &NullObserver)?;
    let visited: Vec<&str> = record.code_snippets().keys().map(String::as_str).collect();
    assert_eq!(&visited[..3], ["z1.py", "z2.py", "z3.py"]);

    let prompt = build_prompt(&record, OutputFormat::Markdown)?;
    assert!(prompt.contains("\"z1.py\": \"Z1\""));
    assert!(prompt.contains("\"z3.py\": \"Z3\""));
    assert!(!prompt.contains("\"AB\""));
    Ok(())
}
