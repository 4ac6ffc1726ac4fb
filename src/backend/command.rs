//! External command backend
//!
//! Runs a user-supplied program, writes the system instruction and prompt to
//! its stdin and takes its stdout as the generated document. The requested
//! format is exported as `READMEGEN_FORMAT`.

use crate::backend::TextGenerator;
use crate::error::{ReadmeGenError, Result};
use crate::models::OutputFormat;
use crate::output::prompt::system_instruction;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Environment variable carrying the requested output format
pub const FORMAT_ENV: &str = "READMEGEN_FORMAT";

/// Generator backed by an external program
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a whitespace-separated command line such as `llm -m gpt-4o`
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| ReadmeGenError::config_error("Backend command is empty"))?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn request_body(prompt: &str, format: OutputFormat) -> String {
        format!(
            "{}\n\nHere's the project analysis:\n\n{}",
            system_instruction(format),
            prompt
        )
    }
}

impl TextGenerator for CommandGenerator {
    fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String> {
        tracing::debug!(program = %self.program, args = ?self.args, %format, "invoking backend");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(FORMAT_ENV, format.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ReadmeGenError::BackendSpawn {
                program: self.program.clone(),
                source,
            })?;

        // stdin is fed concurrently with reading stdout
        let body = Self::request_body(prompt, format);
        let writer = child
            .stdin
            .take()
            .map(|mut stdin| thread::spawn(move || stdin.write_all(body.as_bytes())));

        let output = child
            .wait_with_output()
            .map_err(|e| ReadmeGenError::generation_error(format!("backend did not finish: {}", e)))?;
        if let Some(writer) = writer {
            prompt_delivered(&self.program, writer.join());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("'{}' exited with {}", self.program, output.status)
            } else {
                format!("'{}' exited with {}: {}", self.program, output.status, stderr.trim())
            };
            return Err(ReadmeGenError::generation_error(detail));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(ReadmeGenError::generation_error(format!(
                "'{}' produced no output",
                self.program
            )));
        }

        tracing::debug!(bytes = text.len(), "backend finished");
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Log a prompt that did not fully reach the backend; returns whether it did
fn prompt_delivered(program: &str, outcome: thread::Result<io::Result<()>>) -> bool {
    match outcome {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::debug!(program, error = %e, "backend stopped reading the prompt early");
            false
        }
        Err(_) => {
            tracing::debug!(program, "prompt writer thread panicked");
            false
        }
    }
}
