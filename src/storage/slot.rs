//! Durable key-value slots
//!
//! A slot is a named text value, like a browser storage item. The on-disk
//! store keeps one `<key>.json` file per slot inside the data directory.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{WalletError, WalletResult};

use super::file_io::{read_text, write_text_atomic};

/// A key-value store of text slots
pub trait SlotStore {
    /// Read a slot, `None` if it has never been written
    fn get(&self, key: &str) -> WalletResult<Option<String>>;

    /// Overwrite a slot with a new value
    fn set(&mut self, key: &str, value: &str) -> WalletResult<()>;
}

/// Slots stored as files in a directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> WalletResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(WalletError::Storage(format!("Invalid slot key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: &str) -> WalletResult<Option<String>> {
        read_text(self.slot_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> WalletResult<()> {
        write_text_atomic(self.slot_path(key)?, value)
    }
}

/// Slots held in memory, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: &str) -> WalletResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> WalletResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slots() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSlotStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("walletWatchTransactions").unwrap(), None);

        store.set("walletWatchTransactions", "[]").unwrap();
        assert_eq!(
            store.get("walletWatchTransactions").unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp_dir.path().join("walletWatchTransactions.json").exists());
    }

    #[test]
    fn test_file_slot_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSlotStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../outside", "[]").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_memory_slots() {
        let mut store = MemorySlotStore::new().with_slot("a", "1");
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("b").unwrap(), None);
    }
}
