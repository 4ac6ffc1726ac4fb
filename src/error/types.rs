//! Error types and definitions for readmegen
//!
//! Errors are split by severity: per-file failures during a scan are
//! warnings that never abort the run, configuration problems and a missing
//! scan root are critical.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for readmegen operations
#[derive(Debug, Error)]
pub enum ReadmeGenError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// The scan root does not exist
    #[error("Directory {path} does not exist")]
    NotFound { path: PathBuf },

    /// The scan root exists but cannot be resolved or opened
    #[error("Cannot open project directory {path}: {source}")]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// A single file could not be read
    #[error("Could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON manifest parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// TOML manifest parsing errors with file context
    #[error("TOML parsing error in {file}: {source}")]
    TomlParse {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest parsed but has an unexpected shape
    #[error("Invalid manifest structure in {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The generation backend could not be started
    #[error("Failed to start generation backend '{program}': {source}")]
    BackendSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The generation backend ran but did not produce a document
    #[error("Failed to generate README: {message}")]
    Generation { message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl ReadmeGenError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Per-file problems never stop a scan
            ReadmeGenError::PermissionDenied { .. } => ErrorSeverity::Warning,
            ReadmeGenError::DirectoryTraversal { .. } => ErrorSeverity::Warning,
            ReadmeGenError::FileRead { .. } => ErrorSeverity::Warning,
            ReadmeGenError::JsonParse { .. } => ErrorSeverity::Warning,
            ReadmeGenError::TomlParse { .. } => ErrorSeverity::Warning,
            ReadmeGenError::InvalidManifest { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ReadmeGenError::NotFound { .. } => ErrorSeverity::Critical,
            ReadmeGenError::ScanRoot { .. } => ErrorSeverity::Critical,
            ReadmeGenError::Config { .. } => ErrorSeverity::Critical,
            ReadmeGenError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ReadmeGenError::ConfigRead { .. } => ErrorSeverity::Critical,
            ReadmeGenError::ConfigParse { .. } => ErrorSeverity::Critical,
            ReadmeGenError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReadmeGenError::NotFound { path } => {
                format!("Directory '{}' does not exist. Please provide a valid project directory.", path.display())
            }
            ReadmeGenError::ScanRoot { path, source } => {
                format!("Cannot open project directory '{}': {}. Check that it is a readable directory.", path.display(), source)
            }
            ReadmeGenError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            ReadmeGenError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}. Dependencies from this file were skipped.", file.display(), source)
            }
            ReadmeGenError::TomlParse { file, source } => {
                format!("Invalid TOML in '{}': {}. Dependencies from this file were skipped.", file.display(), source)
            }
            ReadmeGenError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ReadmeGenError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or drop the --config option.", path.display())
            }
            ReadmeGenError::BackendSpawn { program, source } => {
                format!("Could not run '{}': {}. Check the backend_command setting.", program, source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ReadmeGenError::Io { source }
    }

    /// Create a file read error, mapping permission failures to their own variant
    pub fn file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            ReadmeGenError::PermissionDenied { path }
        } else {
            ReadmeGenError::FileRead { path, source }
        }
    }

    /// Create an error for a scan root that cannot be resolved
    pub fn scan_root_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ReadmeGenError::NotFound { path }
        } else {
            ReadmeGenError::ScanRoot { path, source }
        }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ReadmeGenError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a TOML parse error with file context
    pub fn toml_parse_error(file: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ReadmeGenError::TomlParse {
            file: file.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReadmeGenError::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ReadmeGenError::Config {
            message: message.into(),
        }
    }

    /// Create a generation error
    pub fn generation_error(message: impl Into<String>) -> Self {
        ReadmeGenError::Generation {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReadmeGenError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ReadmeGenError {
    fn from(err: std::io::Error) -> Self {
        ReadmeGenError::io_error(err)
    }
}

impl From<serde_json::Error> for ReadmeGenError {
    fn from(err: serde_json::Error) -> Self {
        ReadmeGenError::JsonSerialize { source: err }
    }
}

impl From<walkdir::Error> for ReadmeGenError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error().map(|e| e.kind()) {
            Some(std::io::ErrorKind::PermissionDenied) => ReadmeGenError::PermissionDenied { path },
            _ => ReadmeGenError::DirectoryTraversal {
                path,
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for readmegen operations
pub type Result<T> = std::result::Result<T, ReadmeGenError>;
