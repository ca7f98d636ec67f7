//! In-memory key-value store - used in tests and when no data directory
//! is configured. Note: Data is lost on process restart.

use std::collections::HashMap;
use std::sync::RwLock;

use pukeko_core::error::StoreError;
use pukeko_core::ports::KeyValueStore;

/// In-memory store using a simple HashMap behind an RwLock.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load() {
        let store = InMemoryStore::new();
        store.save("mode", "true").unwrap();
        assert_eq!(store.load("mode").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn load_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.load("absent").unwrap(), None);
    }

    #[test]
    fn save_replaces_previous_value() {
        let store = InMemoryStore::new();
        store.save("mode", "true").unwrap();
        store.save("mode", "false").unwrap();
        assert_eq!(store.load("mode").unwrap(), Some("false".to_string()));
    }
}
