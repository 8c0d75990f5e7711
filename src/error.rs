//! Error types for the mercato CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mercato operations.
///
/// Each variant maps to a specific exit code. The prompt assembler itself is
/// total and never produces an error; everything here belongs to the CLI
/// boundary (file handling, field parsing).
#[derive(Error, Debug)]
pub enum MercatoError {
    /// User provided invalid arguments or referenced a missing file.
    #[error("{0}")]
    UserError(String),

    /// Brief file is malformed or a field value is outside its closed set.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl MercatoError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MercatoError::UserError(_) => exit_codes::USER_ERROR,
            MercatoError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for mercato operations.
pub type Result<T> = std::result::Result<T, MercatoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MercatoError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = MercatoError::ConfigError("unknown tone 'urlato'".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MercatoError::UserError("brief file not found".to_string());
        assert_eq!(err.to_string(), "brief file not found");

        let err = MercatoError::ConfigError("unknown field 'tonality'".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown field 'tonality'"
        );
    }
}
