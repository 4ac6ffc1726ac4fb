//! Prompt rendering for generation backends
//!
//! Turns an `AnalysisRecord` into the natural-language request handed to a
//! `TextGenerator`. Only a sample of the record is included: the first ten
//! dependencies, twenty directories and three snippets.

use crate::error::Result;
use crate::models::{AnalysisRecord, OutputFormat};
use indexmap::IndexMap;

const MAX_PROMPT_DEPENDENCIES: usize = 10;
const MAX_PROMPT_DIRECTORIES: usize = 20;
const MAX_PROMPT_SNIPPETS: usize = 3;
const MAX_PROMPT_SNIPPET_CHARS: usize = 200;

const README_SECTIONS: &str = "\
1. **Project Title and Description** - Infer the project's purpose from the code and structure
2. **Features** - Based on the code analysis
3. **Installation Instructions** - Based on the dependencies and config files found
4. **Usage Examples** - Appropriate for the detected language/framework
5. **Project Structure** - Clean overview of the directory layout
6. **Requirements/Dependencies** - Based on the config files
7. **Contributing Guidelines** - Standard section
8. **License** - Based on detected license
9. **Additional sections** as appropriate (API docs, testing, deployment, etc.)";

const PLAIN_TEXT_NOTE: &str = "\n\nIMPORTANT: Generate the output in plain text format without any markdown syntax (no #, *, `, etc.). Use simple text formatting with line breaks and spacing for structure.";

/// Role instruction sent ahead of every prompt
pub fn system_instruction(format: OutputFormat) -> String {
    let format_instruction = match format {
        OutputFormat::Markdown => "markdown",
        OutputFormat::Text => "plain text without markdown formatting",
    };
    format!(
        "You are an expert technical writer specializing in creating comprehensive, professional README files for software projects. Generate clear, well-structured documentation that follows best practices. Output in {} format.",
        format_instruction
    )
}

/// Render the generation request for `record`
pub fn build_prompt(record: &AnalysisRecord, format: OutputFormat) -> Result<String> {
    let dependencies: IndexMap<&String, &String> = record
        .dependencies()
        .iter()
        .take(MAX_PROMPT_DEPENDENCIES)
        .collect();
    let snippets: IndexMap<&String, String> = record
        .code_snippets()
        .iter()
        .take(MAX_PROMPT_SNIPPETS)
        .map(|(path, content)| (path, shorten(content)))
        .collect();
    let directories: Vec<&str> = record
        .directory_structure()
        .iter()
        .take(MAX_PROMPT_DIRECTORIES)
        .map(String::as_str)
        .collect();

    let format_note = match format {
        OutputFormat::Markdown => "",
        OutputFormat::Text => PLAIN_TEXT_NOTE,
    };

    Ok(format!(
        "
Generate a comprehensive README file for a software project based on the following analysis:

**Project Information:**
- Project Name: {name}
- Main Language: {language}
- Total Files: {total}
- Has Tests: {tests}
- Has Documentation: {docs}
- License: {license}

**File Types Found:**
{file_types}

**Configuration Files:**
{config_files}

**Dependencies (sample):**
{dependencies}

**Directory Structure:**
{directories}

**Code Samples (for context):**
{snippets}

Please generate a professional README that includes:

{sections}

Make it professional, clear, and tailored to this specific project.{format_note}
",
        name = record.project_name(),
        language = record.main_language().unwrap_or("Unknown"),
        total = record.total_files(),
        tests = record.has_tests(),
        docs = record.has_docs(),
        license = record
            .license_type()
            .map(|license| license.as_str())
            .unwrap_or("Not specified"),
        file_types = serde_json::to_string_pretty(record.file_types())?,
        config_files = serde_json::to_string_pretty(record.config_files())?,
        dependencies = serde_json::to_string_pretty(&dependencies)?,
        directories = directories.join("\n"),
        snippets = serde_json::to_string_pretty(&snippets)?,
        sections = README_SECTIONS,
        format_note = format_note,
    ))
}

fn shorten(content: &str) -> String {
    if content.chars().count() > MAX_PROMPT_SNIPPET_CHARS {
        let head: String = content.chars().take(MAX_PROMPT_SNIPPET_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}
