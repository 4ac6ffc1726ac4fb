//! Settings validation

use crate::error::{ReadmeGenError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate fully merged settings.
    ///
    /// The scan path is not checked here; a missing project directory is
    /// reported by the scan itself.
    pub fn validate(settings: &Settings) -> Result<()> {
        if let Some(output_file) = &settings.output_file {
            if output_file.as_os_str().is_empty() {
                return Err(ReadmeGenError::config_error("Output filename must not be empty"));
            }
        }

        if let Some(command) = &settings.backend_command {
            if command.trim().is_empty() {
                return Err(ReadmeGenError::config_error("Backend command must not be empty"));
            }
        }

        Ok(())
    }
}
