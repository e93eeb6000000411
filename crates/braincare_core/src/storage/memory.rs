//! Volatile in-process slots.
//!
//! Backs the session privilege flag: contents vanish with the process, the
//! same way browser session storage vanishes with the tab.

use super::{ensure_slot_name, SlotStorage, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a payload.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        ensure_slot_name(name)?;
        Ok(self.slots.borrow().get(name).cloned())
    }

    fn write_slot(&self, name: &str, payload: &str) -> StorageResult<()> {
        ensure_slot_name(name)?;
        self.slots
            .borrow_mut()
            .insert(name.to_string(), payload.to_string());
        Ok(())
    }

    fn remove_slot(&self, name: &str) -> StorageResult<()> {
        ensure_slot_name(name)?;
        self.slots.borrow_mut().remove(name);
        Ok(())
    }
}
