//! Blob store trait definition.
//!
//! `BlobStore` is the key-value interface the vote records persist through.
//! Values are opaque strings (JSON in practice); the store never interprets
//! them. Backends: [`MemoryStore`](super::MemoryStore) and
//! [`FileStore`](super::FileStore).

use crate::error::{Result, VoteError};

/// Key-value blob storage for a single local user.
///
/// All implementations must ensure:
/// - `get` on a key that was never written returns `Ok(None)`
/// - `set` replaces the whole value; there is no partial update
/// - `remove` on an absent key succeeds
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `VoteError::Storage` if the backend cannot persist the value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Reject keys that could escape a backend's namespace.
///
/// Keys are limited to ASCII alphanumerics, `-` and `_`.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(VoteError::InvalidInput("Empty store key".to_string()));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(VoteError::InvalidInput(format!(
            "Store key contains invalid characters: {}",
            key
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_store: &dyn BlobStore) {}
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("voting-items").is_ok());
        assert!(validate_key("user_votes2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
    }
}
