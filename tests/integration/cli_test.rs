//! Argument parsing, settings resolution and command dispatch

use clap::Parser;
use readmegen::{
    cli::{commands::exit_code, Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    error::Result,
    models::{OutputFormat, ReportFormat},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn args(argv: &[&str]) -> Args {
    Args::parse_from(argv)
}

/// A project directory plus an empty config file so runs ignore any ambient config
fn create_workspace(root: &Path) -> Result<PathBuf> {
    fs::create_dir_all(root.join("project/src"))?;
    fs::write(root.join("project/src/main.rs"), "fn main() {}\n")?;
    let config = root.join("readmegen.toml");
    fs::write(&config, "")?;
    Ok(config)
}

#[test]
fn test_command_dispatch() {
    assert!(matches!(Command::from_args(args(&["readmegen", "--init"])), Command::Init));
    assert!(matches!(
        Command::from_args(args(&["readmegen", "proj", "--analyze-only", "--json"])),
        Command::Analyze(_)
    ));
    assert!(matches!(
        Command::from_args(args(&["readmegen", "proj", "--prompt-only"])),
        Command::Prompt(_)
    ));
    assert!(matches!(
        Command::from_args(args(&["readmegen", "proj", "--backend-cmd", "llm"])),
        Command::Generate(_)
    ));
}

#[test]
fn test_cli_flags_override_config_file() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("readmegen.toml");
    fs::write(
        &config,
        "output_format = \"markdown\"\nbackend_command = \"from-file\"\nfollow_links = true\n",
    )?;

    let parsed = args(&[
        "readmegen",
        "proj",
        "-f",
        "text",
        "--backend-cmd",
        "from-cli",
        "--analyze-only",
        "--json",
        "-c",
        config.to_str().unwrap_or_default(),
    ]);
    let settings = load_config_with_env_prefix(CliArgs::from(&parsed), "READMEGEN_CLI_TEST_OVERRIDE")?;

    assert_eq!(settings.scan_path, PathBuf::from("proj"));
    assert_eq!(settings.output_format, OutputFormat::Text);
    assert_eq!(settings.resolved_output_file(), PathBuf::from("readme.txt"));
    assert_eq!(settings.backend_command.as_deref(), Some("from-cli"));
    assert_eq!(settings.report_format, ReportFormat::Json);
    assert!(settings.follow_links);
    Ok(())
}

#[test]
fn test_analyze_and_prompt_commands_succeed() -> Result<()> {
    let dir = tempdir()?;
    let config = create_workspace(dir.path())?;
    let project = dir.path().join("project");
    let project = project.to_str().unwrap_or_default();
    let config = config.to_str().unwrap_or_default();

    let analyze = Command::from_args(args(&[
        "readmegen", project, "--analyze-only", "--json", "--no-progress", "-c", config,
    ]));
    assert_eq!(analyze.run(), 0);

    let prompt = Command::from_args(args(&["readmegen", project, "--prompt-only", "-q", "-c", config]));
    assert_eq!(prompt.run(), 0);
    Ok(())
}

#[test]
fn test_generate_without_backend_is_critical() -> Result<()> {
    let dir = tempdir()?;
    let config = create_workspace(dir.path())?;
    let project = dir.path().join("project");

    let command = Command::from_args(args(&[
        "readmegen",
        project.to_str().unwrap_or_default(),
        "--no-progress",
        "-c",
        config.to_str().unwrap_or_default(),
    ]));
    let err = command.execute().expect_err("no backend configured");

    assert_eq!(exit_code(&err), 2);
    assert!(!project.join("README.md").exists());
    Ok(())
}

#[test]
fn test_missing_directory_exit_code() -> Result<()> {
    let dir = tempdir()?;
    let config = create_workspace(dir.path())?;

    let command = Command::from_args(args(&[
        "readmegen",
        "/no/such/project/dir",
        "--analyze-only",
        "--no-progress",
        "-c",
        config.to_str().unwrap_or_default(),
    ]));
    assert_eq!(command.run(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unopenable_directory_exit_code() -> Result<()> {
    let dir = tempdir()?;
    let config = create_workspace(dir.path())?;
    let root = dir.path().join("project/src/main.rs/nested");

    let command = Command::from_args(args(&[
        "readmegen",
        root.to_str().unwrap_or_default(),
        "--analyze-only",
        "--no-progress",
        "-c",
        config.to_str().unwrap_or_default(),
    ]));
    assert_eq!(command.run(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_generate_with_command_backend() -> Result<()> {
    let dir = tempdir()?;
    let config = create_workspace(dir.path())?;
    let project = dir.path().join("project");

    let command = Command::from_args(args(&[
        "readmegen",
        project.to_str().unwrap_or_default(),
        "--backend-cmd",
        "cat",
        "-o",
        "GENERATED.md",
        "-q",
        "--no-progress",
        "-c",
        config.to_str().unwrap_or_default(),
    ]));
    command.execute()?;

    let written = fs::read_to_string(project.join("GENERATED.md"))?;
    assert!(written.contains("Here's the project analysis:"));
    assert!(written.contains("- Main Language: .rs"));
    Ok(())
}
