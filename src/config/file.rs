//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ReadmeGenError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".readmegen.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "READMEGEN";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a file source for `.readmegen.toml` in the current directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a file source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the commented default configuration to this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ReadmeGenError::ConfigNotFound {
                path: self.path.clone(),
            });
        }
        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_SCAN_PATH`, `<PREFIX>_OUTPUT_FORMAT`, `<PREFIX>_OUTPUT_FILE`,
/// `<PREFIX>_BACKEND_COMMAND`, `<PREFIX>_REPORT_FORMAT` and
/// `<PREFIX>_FOLLOW_LINKS`.
pub struct EnvConfig {
    prefix: String,
    name: String,
}

const ENV_KEYS: &[&str] = &[
    "SCAN_PATH",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "BACKEND_COMMAND",
    "REPORT_FORMAT",
    "FOLLOW_LINKS",
];

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T>
    where
        T::Err: std::fmt::Display,
    {
        let raw = self.var(key)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(variable = %format!("{}_{}", self.prefix, key), "ignoring invalid value: {}", e);
                None
            }
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(PartialSettings {
            scan_path: self.var("SCAN_PATH").map(PathBuf::from),
            output_format: self.parsed("OUTPUT_FORMAT"),
            output_file: self.var("OUTPUT_FILE").map(PathBuf::from),
            backend_command: self.var("BACKEND_COMMAND"),
            report_format: self.parsed("REPORT_FORMAT"),
            follow_links: self.parsed("FOLLOW_LINKS"),
            ..Default::default()
        })
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
