//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, FormatArg};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings, ReportFormat};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Command-line values that feed settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub directory: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub backend_command: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub follow_links: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            directory: args.directory.clone(),
            output_file: args.output.clone(),
            format: args.format.map(|format| match format {
                FormatArg::Markdown => OutputFormat::Markdown,
                FormatArg::Text => OutputFormat::Text,
            }),
            backend_command: args.backend_cmd.clone(),
            json: args.json,
            quiet: args.quiet,
            verbose: args.verbose,
            follow_links: args.follow_links,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Config file given with `--config`, if any
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            scan_path: self.args.directory.clone(),
            output_format: self.args.format,
            output_file: self.args.output_file.clone(),
            backend_command: self.args.backend_command.clone(),
            ..Default::default()
        };

        // flags only ever override toward their non-default value
        if self.args.json {
            settings.report_format = Some(ReportFormat::Json);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }
        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_config_source() {
        let args = CliArgs {
            directory: Some(PathBuf::from("/cli/project")),
            format: Some(OutputFormat::Text),
            json: true,
            verbose: true,
            no_colors: true,
            ..Default::default()
        };

        let cli_config = CliConfig::new(args);
        assert!(cli_config.is_available());

        let settings = cli_config.load().unwrap();
        assert_eq!(settings.scan_path, Some(PathBuf::from("/cli/project")));
        assert_eq!(settings.output_format, Some(OutputFormat::Text));
        assert_eq!(settings.report_format, Some(ReportFormat::Json));
        assert_eq!(settings.verbose, Some(true));
        assert_eq!(settings.use_colors, Some(false));
        assert_eq!(settings.quiet, None);
        assert_eq!(settings.show_progress, None);
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "readmegen",
            "./project",
            "-o",
            "DOCS.md",
            "-f",
            "markdown",
            "--backend-cmd",
            "llm -m gpt-4o",
            "--no-progress",
            "--follow-links",
            "--config",
            "custom.toml",
        ]);

        let cli_config = CliConfig::from_args(&args);
        assert_eq!(cli_config.config_path(), Some(&PathBuf::from("custom.toml")));

        let settings = cli_config.load().unwrap();
        assert_eq!(settings.scan_path, Some(PathBuf::from("./project")));
        assert_eq!(settings.output_file, Some(PathBuf::from("DOCS.md")));
        assert_eq!(settings.output_format, Some(OutputFormat::Markdown));
        assert_eq!(settings.backend_command.as_deref(), Some("llm -m gpt-4o"));
        assert_eq!(settings.show_progress, Some(false));
        assert_eq!(settings.follow_links, Some(true));
        assert_eq!(settings.report_format, None);
    }
}
