//! Storage layer for Wallet Watch
//!
//! Provides durable key-value slots backed by JSON files with atomic writes,
//! and the repository that persists the ledger into one of them.

pub mod file_io;
pub mod init;
pub mod slot;
pub mod transactions;

pub use file_io::{read_text, write_text_atomic};
pub use init::{initialize_storage, seed_transactions};
pub use slot::{FileSlotStore, MemorySlotStore, SlotStore};
pub use transactions::{LoadSource, LoadedLedger, TransactionRepository};

use crate::config::paths::WalletPaths;
use crate::config::settings::Settings;
use crate::error::WalletError;

/// Open the on-disk repository configured by `settings`
pub fn open_repository(
    paths: &WalletPaths,
    settings: &Settings,
) -> Result<TransactionRepository, WalletError> {
    initialize_storage(paths)?;
    let slots = FileSlotStore::new(paths.data_dir());
    Ok(TransactionRepository::new(
        Box::new(slots),
        settings.storage_key.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_repository() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let mut repo = open_repository(&paths, &settings).unwrap();
        assert!(paths.data_dir().exists());

        let loaded = repo.load(0).unwrap();
        repo.save(&loaded.ledger).unwrap();
        assert!(paths
            .data_dir()
            .join("walletWatchTransactions.json")
            .exists());
    }
}
