use anyhow::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::storage::KeyValueStore;

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, String>,
    writes: usize,
}

/// Process-local store. Clones share the same entries, so a handle kept by the
/// caller observes every write made through another clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Entries>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }

    #[cfg(test)]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .write()
            .values
            .insert(key.to_owned(), value.to_owned());
        self
    }

    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.entries.read().writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.values.insert(key.to_owned(), value.to_owned());
        entries.writes += 1;
        Ok(())
    }
}
