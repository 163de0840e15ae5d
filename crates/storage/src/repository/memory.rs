//! In-memory KeyValueRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{KeyValueRepository, Result, StoreError};

/// In-memory implementation of KeyValueRepository.
#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with `value` already stored under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: RwLock::new(values),
        }
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}
