//! Error types for strict validation.
//!
//! These never escape the validator entry points: a [`ValidateError`] raised
//! while reading the table becomes a single file-level
//! [`ValidationError`](carteira_model::ValidationError). Only the error
//! report writer returns them to the caller.

use thiserror::Error;

/// Errors raised while validating or reporting.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The input has no non-blank line.
    #[error("Arquivo vazio")]
    EmptyFile,

    /// Failed to write the error report.
    #[error("failed to write error report: {0}")]
    Report(#[from] csv::Error),

    /// I/O error while flushing the error report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_level_messages_are_user_facing() {
        assert_eq!(ValidateError::EmptyFile.to_string(), "Arquivo vazio");
    }
}
