//! Repository contract for the persisted document.

use super::Result;

/// Opaque string key/value storage.
///
/// The document store keeps exactly one key; values are whole serialized
/// documents. Implementations must make `set` atomic per key: a reader sees
/// either the previous value or the new one, never a partial write.
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    fn exists(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
