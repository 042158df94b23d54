//! Transaction repository
//!
//! Reads and writes the whole ledger as one JSON array in a single slot.
//! There are no partial writes: every save replaces the slot.

use tracing::{debug, warn};

use crate::error::{WalletError, WalletResult};
use crate::models::Ledger;

use super::init::seed_transactions;
use super::slot::SlotStore;

/// Where a loaded ledger came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// The slot held a valid ledger
    Persisted,
    /// The slot was empty; example entries were used
    Seeded,
    /// The slot was unreadable; example entries were used and the raw value
    /// was copied to the backup slot
    Recovered { reason: String, backup_key: String },
}

/// Result of [`TransactionRepository::load`]
#[derive(Debug, Clone)]
pub struct LoadedLedger {
    pub ledger: Ledger,
    pub source: LoadSource,
}

/// Persistence adapter between the ledger and a slot store
pub struct TransactionRepository {
    slots: Box<dyn SlotStore>,
    key: String,
}

impl TransactionRepository {
    /// Create a repository over `slots`, persisting under `key`
    pub fn new(slots: Box<dyn SlotStore>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// The slot key a corrupt value is copied to before it is replaced
    pub fn backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Load the persisted ledger, or the example entries if there is none
    ///
    /// A malformed value (bad JSON, wrong shape, blank description,
    /// non-positive amount, duplicate id) is treated like a missing one after
    /// being copied aside.
    pub fn load(&mut self, now_millis: i64) -> WalletResult<LoadedLedger> {
        let Some(raw) = self.slots.get(&self.key)? else {
            debug!(key = %self.key, "slot empty, using example entries");
            return Ok(LoadedLedger {
                ledger: seeded(now_millis)?,
                source: LoadSource::Seeded,
            });
        };

        match parse_ledger(&raw) {
            Ok(ledger) => {
                debug!(key = %self.key, count = ledger.len(), "loaded ledger");
                Ok(LoadedLedger {
                    ledger,
                    source: LoadSource::Persisted,
                })
            }
            Err(reason) => {
                let backup_key = self.backup_key();
                warn!(
                    key = %self.key,
                    backup = %backup_key,
                    %reason,
                    "persisted ledger is corrupt, falling back to example entries"
                );
                self.slots.set(&backup_key, &raw)?;
                Ok(LoadedLedger {
                    ledger: seeded(now_millis)?,
                    source: LoadSource::Recovered { reason, backup_key },
                })
            }
        }
    }

    /// Overwrite the slot with the full ledger
    pub fn save(&mut self, ledger: &Ledger) -> WalletResult<()> {
        let contents = serde_json::to_string_pretty(ledger.as_slice())?;
        self.slots.set(&self.key, &contents)?;
        debug!(key = %self.key, count = ledger.len(), "saved ledger");
        Ok(())
    }

    /// Raw value currently in the ledger slot
    pub fn raw(&self) -> WalletResult<Option<String>> {
        self.slots.get(&self.key)
    }
}

fn seeded(now_millis: i64) -> WalletResult<Ledger> {
    Ledger::from_records(seed_transactions(now_millis))
        .map_err(|e| WalletError::Storage(format!("Invalid example entries: {}", e)))
}

fn parse_ledger(raw: &str) -> Result<Ledger, String> {
    let records = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    Ledger::from_records(records).map_err(|e| e.to_string())
}
