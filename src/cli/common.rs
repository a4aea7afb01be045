//! Shared types for CLI command handlers.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::error::ThemeError;
use crate::models::Palette;
use crate::services::PaletteFileService;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: invalid palette, unknown category, failed validation
    Validation = 1,
    /// File could not be read or written
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command handler.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process ends with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ThemeError> for CliError {
    fn from(err: ThemeError) -> Self {
        if err.is_user_error() {
            Self::validation(err.to_string())
        } else {
            Self::io(err.to_string())
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, falling back to defaults if the file is unusable.
pub fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config file: {e:#}");
            Config::default()
        }
    }
}

/// Loads the palette at `path`, or the configured startup palette, or the
/// built-in default.
///
/// A missing or unreadable file is an I/O error; text that is not a palette
/// is a validation error.
pub fn load_palette(path: Option<&Path>, config: &Config) -> CliResult<Palette> {
    let path = path.or(config.palette.file.as_deref());
    PaletteFileService::load_or_default(path).map_err(|e| match path {
        Some(path) if e.is_user_error() => {
            CliError::validation(format!("{}: {e}", path.display()))
        }
        _ => e.into(),
    })
}

/// Writes `contents` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, contents: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            PaletteFileService::write_atomic(path, contents)?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{text}");
    Ok(())
}
