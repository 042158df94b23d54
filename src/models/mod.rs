//! Core data models for Wallet Watch
//!
//! This module contains the data structures of the tracker: transactions,
//! their ids and amounts, the list filter, and the in-memory ledger.

pub mod filter;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use filter::TypeFilter;
pub use ids::TransactionId;
pub use ledger::{Ledger, LedgerError};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
