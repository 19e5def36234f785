//! In-process key-value storage.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Process-lifetime key-value storage backed by a `HashMap`.
///
/// This is the default adapter for tests and for embedders that do not need
/// durability across restarts. For a store that survives restarts, use the
/// file-backed adapter from the infrastructure crate.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("memory storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory storage lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("auth.active", "true").unwrap();
        assert_eq!(storage.get("auth.active"), Some("true".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart.items"), None);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("auth.identity", "admin").unwrap();
        storage.set("auth.identity", "other").unwrap();
        assert_eq!(storage.get("auth.identity"), Some("other".to_string()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("cart.items", "[]").unwrap();
        storage.remove("cart.items").unwrap();
        storage.remove("cart.items").unwrap();
        assert_eq!(storage.get("cart.items"), None);
    }
}
