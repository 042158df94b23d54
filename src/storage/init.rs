//! Storage initialization
//!
//! Handles first-run setup and the example entries shown on an empty slot

use crate::config::paths::WalletPaths;
use crate::error::WalletError;
use crate::models::{Money, Transaction, TransactionId, TransactionType};

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &WalletPaths) -> Result<(), WalletError> {
    paths.ensure_directories()
}

/// The three example entries used when nothing has been persisted yet
///
/// Ids are `now + 1`, `now + 2`, `now + 3`.
pub fn seed_transactions(now_millis: i64) -> Vec<Transaction> {
    let examples = [
        ("Food", 2_000, TransactionType::Expense),
        ("Allowance", 70_000, TransactionType::Income),
        ("Party", 40_000, TransactionType::Expense),
    ];

    examples
        .into_iter()
        .zip(1..)
        .map(|((description, cents, kind), offset)| {
            Transaction::new(
                TransactionId::from_raw(now_millis + offset),
                description,
                Money::from_cents(cents),
                kind,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seed_transactions() {
        let seed = seed_transactions(1_000);

        assert_eq!(seed.len(), 3);
        let ids: Vec<_> = seed.iter().map(|t| t.id.raw()).collect();
        assert_eq!(ids, [1_001, 1_002, 1_003]);
        assert_eq!(seed.iter().filter(|t| t.kind == TransactionType::Expense).count(), 2);
        assert_eq!(seed[1].description, "Allowance");
        assert_eq!(seed[1].amount.to_fixed(), "700.00");
    }

    #[test]
    fn test_initialize_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().join("wallet"));

        initialize_storage(&paths).unwrap();
        assert!(paths.data_dir().exists());
    }
}
