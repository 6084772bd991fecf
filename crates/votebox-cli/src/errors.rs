//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use votebox_core::VoteError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (item, config)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Records are unreadable or inconsistent
    Corrupt { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Corrupt { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Corrupt error with message and hint.
    pub fn corrupt(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Corrupt {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Corrupt { .. } => exit_codes::CORRUPT,
        }
    }
}

/// Contextual hint for a core error, if one applies.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<VoteError>()? {
        VoteError::ItemNotFound(_) => Some("Hint: Run `votebox list` to see item IDs."),
        VoteError::Corrupt { .. } => Some(
            "Hint: Fix or remove the file, or run `votebox reset --yes` to start over.",
        ),
        VoteError::Storage(_) => Some("Hint: Check that the store directory is writable."),
        _ => None,
    }
}

/// Exit code for an error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<VoteError>() {
        Some(VoteError::ItemNotFound(_)) => exit_codes::NOT_FOUND,
        Some(VoteError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        Some(VoteError::Corrupt { .. }) => exit_codes::CORRUPT,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_maps_to_exit_code() {
        let err = anyhow::Error::new(VoteError::ItemNotFound("9".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
        assert!(hint_for(&err).unwrap().contains("votebox list"));
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Item \"9\" not found", "Hint: try again");
        assert_eq!(err.to_string(), "Item \"9\" not found\nHint: try again");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_corrupt_maps_to_exit_code() {
        let err = anyhow::Error::new(VoteError::corrupt("user-votes", "bad"));
        assert_eq!(exit_code_for(&err), exit_codes::CORRUPT);
    }

    #[test]
    fn test_unknown_error_is_general_failure() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
        assert!(hint_for(&err).is_none());
    }

    #[test]
    fn test_cli_error_downcast() {
        let err = anyhow::Error::new(CliError::invalid_input("bad category"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
