//! Error types for envcreate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for envcreate operations.
#[derive(Error, Debug)]
pub enum EnvError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// The field table (built-in or loaded from YAML) is malformed.
    #[error("Invalid field table: {0}")]
    ConfigError(String),

    /// An answer was rejected and the retry budget is exhausted.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Reading from or writing to the terminal failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// Writing a file failed.
    #[error("Write failed: {0}")]
    WriteError(String),
}

impl EnvError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvError::UserError(_) => exit_codes::USER_ERROR,
            EnvError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            EnvError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            EnvError::PromptError(_) => exit_codes::PROMPT_FAILURE,
            EnvError::WriteError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for envcreate operations.
pub type Result<T> = std::result::Result<T, EnvError>;
