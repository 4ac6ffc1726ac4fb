//! Command implementations

use super::Args;
use crate::backend::CommandGenerator;
use crate::config::{self, CliArgs, FileConfig, DEFAULT_CONFIG_FILE};
use crate::core::{Analyzer, ReadmeGenerator};
use crate::error::{ErrorSeverity, ReadmeGenError, Result};
use crate::models::Settings;
use crate::output::{build_prompt, create_formatter, OutputWriter, ProgressReporter, StdoutWriter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Write a default configuration file
    Init,
    /// Print the analysis report
    Analyze(Args),
    /// Print the generation prompt
    Prompt(Args),
    /// Generate and write the README
    Generate(Args),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init
        } else if args.analyze_only {
            Command::Analyze(args)
        } else if args.prompt_only {
            Command::Prompt(args)
        } else {
            Command::Generate(args)
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Init => init_config(),
            Command::Analyze(args) => {
                let settings = load_settings(args)?;
                let record = scan(&settings)?;
                let formatter = create_formatter(
                    settings.report_format,
                    settings.use_colors,
                    settings.verbose,
                    settings.quiet,
                );
                StdoutWriter.write(&formatter.format(&record)?)
            }
            Command::Prompt(args) => {
                let settings = load_settings(args)?;
                let record = scan(&settings)?;
                let mut prompt = build_prompt(&record, settings.output_format)?;
                prompt.push('\n');
                StdoutWriter.write(&prompt)
            }
            Command::Generate(args) => {
                let settings = load_settings(args)?;
                let command_line = settings.backend_command.as_deref().ok_or_else(|| {
                    ReadmeGenError::config_error(
                        "No generation backend configured; pass --backend-cmd or set backend_command in .readmegen.toml",
                    )
                })?;
                let generator = CommandGenerator::from_command_line(command_line)?;
                let pipeline = ReadmeGenerator::new(Analyzer::from_settings(&settings), generator);

                let reporter = progress_for(&settings);
                reporter.set_message(&format!("Analyzing {}", settings.scan_path.display()));
                let path = pipeline.run(&settings, &reporter)?;
                reporter.clear();

                if !settings.quiet {
                    println!("README generated: {}", path.display());
                }
                Ok(())
            }
        }
    }

    /// Run the command and map failures to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(&err)
            }
        }
    }
}

/// Exit code for an error: warnings 0, errors 1, critical 2
pub fn exit_code(err: &ReadmeGenError) -> i32 {
    match err.severity() {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let settings = config::load_config(CliArgs::from(args))?;
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn progress_for(settings: &Settings) -> ProgressReporter {
    ProgressReporter::new(settings.show_progress && !settings.quiet)
}

fn scan(settings: &Settings) -> Result<crate::models::AnalysisRecord> {
    let reporter = progress_for(settings);
    reporter.set_message(&format!("Analyzing {}", settings.scan_path.display()));
    let record = Analyzer::from_settings(settings).scan(&settings.scan_path, &reporter)?;
    reporter.clear();

    if reporter.warning_count() > 0 {
        tracing::info!(warnings = reporter.warning_count(), "some files were skipped");
    }
    Ok(record)
}

fn init_config() -> Result<()> {
    let source = FileConfig::new();
    if source.path().exists() {
        println!("Configuration file already exists at: {}", source.path().display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    source.create_default()?;
    println!("Created default configuration file at: {}", DEFAULT_CONFIG_FILE);
    println!("Uncomment and edit the settings you want to change, for example backend_command.");
    Ok(())
}
