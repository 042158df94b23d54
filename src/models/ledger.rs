//! The in-memory store of transactions
//!
//! An insertion-ordered list with no secondary indices. Lookups by id are
//! linear scans; the list is small and order matters more than speed.

use std::collections::HashSet;
use std::fmt;

use super::filter::TypeFilter;
use super::ids::TransactionId;
use super::transaction::{Transaction, TransactionValidationError};

/// Ordered collection of every transaction in the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from persisted records, checking every invariant
    pub fn from_records(records: Vec<Transaction>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::with_capacity(records.len());
        for txn in &records {
            txn.validate().map_err(|source| LedgerError::InvalidRecord {
                id: txn.id,
                source,
            })?;
            if !seen.insert(txn.id) {
                return Err(LedgerError::DuplicateId(txn.id));
            }
        }
        Ok(Self {
            transactions: records,
        })
    }

    /// Append a transaction at the end
    pub fn push(&mut self, txn: Transaction) -> Result<(), LedgerError> {
        if self.contains(txn.id) {
            return Err(LedgerError::DuplicateId(txn.id));
        }
        self.transactions.push(txn);
        Ok(())
    }

    /// Remove the transaction with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.find(id).is_some()
    }

    /// Highest id currently held
    pub fn latest_id(&self) -> Option<TransactionId> {
        self.transactions.iter().map(|t| t.id).max()
    }

    /// Issue a fresh id for a transaction created at `now_millis`
    pub fn issue_id(&self, now_millis: i64) -> TransactionId {
        TransactionId::issue(now_millis, self.latest_id())
    }

    /// Transactions passing `filter`, in insertion order
    pub fn filtered(&self, filter: TypeFilter) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| filter.matches(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Ledger invariant violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    DuplicateId(TransactionId),
    InvalidRecord {
        id: TransactionId,
        source: TransactionValidationError,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "Duplicate transaction id {}", id),
            Self::InvalidRecord { id, source } => {
                write!(f, "Invalid transaction {}: {}", id, source)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
