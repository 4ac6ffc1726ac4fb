//! Output formatting functionality
//!
//! Renders an `AnalysisRecord` as a human-readable report or as JSON.

use crate::error::Result;
use crate::models::AnalysisRecord;
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

/// Directories listed in a non-verbose report
const SUMMARY_DIRECTORY_LIMIT: usize = 10;

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        Blue.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn yes_no(value: bool, use_colors: bool) -> String {
    match (value, use_colors) {
        (true, true) => Green.paint("✓").to_string(),
        (false, true) => Red.paint("✗").to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

fn dimmed(text: &str, use_colors: bool) -> String {
    if use_colors {
        Style::new().dimmed().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// One-line summary used in quiet mode
pub fn format_record_summary(record: &AnalysisRecord) -> String {
    format!(
        "{}: {} files, main language {}, {} dependencies\n",
        record.project_name(),
        record.total_files(),
        record.main_language().unwrap_or("unknown"),
        record.dependencies().len()
    )
}

/// Format an analysis record as text
pub fn format_record_text(record: &AnalysisRecord, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n\n",
        heading(&format!("Project Analysis: {}", record.project_name()), use_colors)
    ));

    output.push_str(&format!("Total files: {}\n", record.total_files()));
    let language = record.main_language().unwrap_or("unknown");
    if use_colors {
        output.push_str(&format!("Main language: {}\n", Cyan.paint(language)));
    } else {
        output.push_str(&format!("Main language: {}\n", language));
    }
    output.push_str(&format!("Tests: {}\n", yes_no(record.has_tests(), use_colors)));
    output.push_str(&format!("Documentation: {}\n", yes_no(record.has_docs(), use_colors)));
    match record.license_type() {
        Some(license) => output.push_str(&format!("License: {}\n", license)),
        None => output.push_str(&format!("License: {}\n", dimmed("not specified", use_colors))),
    }

    // Extensions, most frequent first
    let mut file_types: Vec<(&String, &usize)> = record.file_types().iter().collect();
    file_types.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if !file_types.is_empty() {
        output.push_str(&format!("\n{}\n", heading("File Types:", use_colors)));
        for (extension, count) in file_types {
            let label = if extension.is_empty() {
                "(none)"
            } else {
                extension.as_str()
            };
            output.push_str(&format!("  {:<12} {}\n", label, count));
        }
    }

    if !record.config_files().is_empty() {
        output.push_str(&format!("\n{}\n", heading("Configuration Files:", use_colors)));
        for (name, path) in record.config_files() {
            output.push_str(&format!("  {} {}\n", name, dimmed(path, use_colors)));
        }
    }

    if !record.dependencies().is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            heading(&format!("Dependencies ({}):", record.dependencies().len()), use_colors)
        ));
        for (name, version) in record.dependencies() {
            output.push_str(&format!("  {} {}\n", name, dimmed(version, use_colors)));
        }
    }

    let directories = record.directory_structure();
    if !directories.is_empty() {
        output.push_str(&format!("\n{}\n", heading("Directories:", use_colors)));
        let shown = if verbose {
            directories.len()
        } else {
            directories.len().min(SUMMARY_DIRECTORY_LIMIT)
        };
        for directory in &directories[..shown] {
            output.push_str(&format!("  {}\n", directory));
        }
        if shown < directories.len() {
            let more = format!("  ... and {} more\n", directories.len() - shown);
            if use_colors {
                output.push_str(&Yellow.paint(more).to_string());
            } else {
                output.push_str(&more);
            }
        }
    }

    if !record.code_snippets().is_empty() {
        output.push_str(&format!("\n{}\n", heading("Code Samples:", use_colors)));
        for (path, snippet) in record.code_snippets() {
            output.push_str(&format!("  {} ({} chars)\n", path, snippet.chars().count()));
            if verbose {
                for line in snippet.lines().take(5) {
                    output.push_str(&format!("    {}\n", dimmed(line, use_colors)));
                }
            }
        }
    }

    output
}

/// Format an analysis record as JSON
pub fn format_record_json(record: &AnalysisRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}
