// ============================================================================
// Key-Value Store Interface
// Storage contract for the persistence collaborator (settings, history, theme)
// ============================================================================

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failed
    Io(String),
    /// Stored text could not be encoded or decoded
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "storage serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String key to string value storage, one independent slot per key.
///
/// Writes are synchronous and idempotent, so callers may save on every
/// relevant state change.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key is absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Create or replace a value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.values.write().remove(key);
        Ok(())
    }
}
