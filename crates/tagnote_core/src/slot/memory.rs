//! In-process slot backend.

use super::{SlotResult, SlotStore};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Slot backend that keeps raw values in memory.
///
/// Single-threaded by construction (`RefCell`), matching the one logical
/// thread of control the stores run on.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing any typed slot.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Returns a copy of the raw stored value.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, value: &str) -> SlotResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySlotStore;
    use crate::slot::SlotStore;

    #[test]
    fn save_overwrites_previous_value() {
        let store = MemorySlotStore::new();
        store.save("TAGS", "[1]").unwrap();
        store.save("TAGS", "[2]").unwrap();
        assert_eq!(store.load("TAGS").unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.load("NOTES").unwrap(), None);
    }
}
