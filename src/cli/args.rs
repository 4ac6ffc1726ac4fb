//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// readmegen - generate a README from a project's structure
#[derive(Parser, Debug, Clone)]
#[command(name = "readmegen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze a project directory and generate a README for it")]
#[command(long_about = "readmegen scans a project directory, summarizes its file types, configuration files, \
dependencies, tests, documentation and license, and hands that summary to a text generation backend \
that writes the README. The analysis itself can be printed without any backend.")]
#[command(after_help = "EXAMPLES:

    # Show what readmegen learns about the current directory
    readmegen --analyze-only

    # Same, as JSON
    readmegen ./my-project --analyze-only --json

    # Print the prompt that would be sent to the backend
    readmegen ./my-project --prompt-only

    # Generate README.md using an external command as backend
    readmegen ./my-project --backend-cmd \"llm -m gpt-4o\"

    # Generate a plain-text readme.txt
    readmegen ./my-project -f text --backend-cmd \"llm\"

    # Create a default .readmegen.toml
    readmegen --init
")]
pub struct Args {
    /// Project directory to analyze
    #[arg(value_name = "DIRECTORY", help = "Project directory to analyze (defaults to the current directory)")]
    pub directory: Option<PathBuf>,

    /// Output filename
    #[arg(short, long, value_name = "FILE", help = "Output filename, relative to the project directory (default: README.md, or readme.txt for text)")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, help = "Format of the generated document")]
    pub format: Option<FormatArg>,

    /// Generation backend command
    #[arg(long, value_name = "CMD", help = "Program that reads the prompt on stdin and prints the README (e.g. \"llm -m gpt-4o\")")]
    pub backend_cmd: Option<String>,

    /// Only print the analysis
    #[arg(long, conflicts_with = "prompt_only", help = "Print the project analysis instead of generating a README")]
    pub analyze_only: bool,

    /// Print the analysis as JSON
    #[arg(long, requires = "analyze_only", help = "Print the analysis as JSON (requires --analyze-only)")]
    pub json: bool,

    /// Only print the prompt
    #[arg(long, help = "Print the prompt that would be sent to the backend")]
    pub prompt_only: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .readmegen.toml if present)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.readmegen.toml) in the current directory")]
    pub init: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show debug logging and a more detailed analysis report")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI or when redirecting output)")]
    pub no_progress: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Markdown README.md
    Markdown,
    /// Plain-text readme.txt
    Text,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
