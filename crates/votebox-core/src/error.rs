//! Error types for Votebox core operations.
//!
//! Missing records and redundant votes are not errors; they are handled as
//! first-run seeding and idempotent no-ops respectively. What remains is
//! storage failure, unreadable records and references to unknown items.

use thiserror::Error;

/// Result type alias for Votebox operations.
pub type Result<T> = std::result::Result<T, VoteError>;

/// Core error type for Votebox operations.
#[derive(Debug, Error)]
pub enum VoteError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted record exists but cannot be parsed
    #[error("Corrupt record \"{key}\": {message}")]
    Corrupt { key: String, message: String },

    /// Encoding a record for storage failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Vote references an item that is not in the catalog
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VoteError {
    /// Build a `Corrupt` error for the given record key.
    pub fn corrupt(key: impl Into<String>, message: impl std::fmt::Display) -> Self {
        VoteError::Corrupt {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for VoteError {
    fn from(err: std::io::Error) -> Self {
        VoteError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for VoteError {
    fn from(err: serde_json::Error) -> Self {
        VoteError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_message_names_key() {
        let err = VoteError::corrupt("user-votes", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Corrupt record \"user-votes\": expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(VoteError::from(io), VoteError::Storage(_)));
    }
}
