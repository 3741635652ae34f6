//! Core error types for the holdings analytics crate.
//!
//! The analytics routines themselves are total over their input domain and never
//! fail. Errors only surface when loading a snapshot or a configuration from
//! external JSON and when validating a configuration.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Failed to parse holdings snapshot: {0}")]
    Snapshot(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
