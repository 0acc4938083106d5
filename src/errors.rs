/*!
 * Error types for the lyricscope application.
 *
 * The analysis engine itself is total and never fails; these types cover the
 * surrounding surfaces (configuration loading, input discovery, the CLI),
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Config file error: {0}")]
    Io(String),

    /// The configuration file is not valid JSON for the expected schema
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A configuration value is outside its accepted range
    #[error("Invalid config value for '{field}': {message}")]
    Invalid {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::Invalid`] value
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Errors that can occur when locating or reading lyric input
#[derive(Error, Debug)]
pub enum InputError {
    /// The requested path does not exist
    #[error("Input not found: {0}")]
    NotFound(String),

    /// The input exists but could not be read
    #[error("Failed to read input: {0}")]
    Unreadable(String),

    /// The input is not a lyric file the tool knows how to handle
    #[error("Unsupported input: {0}")]
    Unsupported(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from input discovery
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
