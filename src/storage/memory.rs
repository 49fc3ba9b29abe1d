use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// A process-local store. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key has been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LAST_ISSUED_DENOM;

    #[test]
    fn get_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LAST_ISSUED_DENOM).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set(LAST_ISSUED_DENOM, "utkn-core1abc").unwrap();
        assert_eq!(
            store.get(LAST_ISSUED_DENOM).unwrap().as_deref(),
            Some("utkn-core1abc")
        );
    }

    #[test]
    fn set_overwrites_single_slot() {
        let mut store = MemoryStore::new();
        store.set(LAST_ISSUED_DENOM, "first").unwrap();
        store.set(LAST_ISSUED_DENOM, "second").unwrap();
        assert_eq!(store.get(LAST_ISSUED_DENOM).unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }
}
