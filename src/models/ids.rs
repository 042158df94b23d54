//! Transaction identifiers
//!
//! Ids are integers derived from the creation time in milliseconds. They are
//! never reused: a new id is always greater than every id already issued.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Issue an id from a millisecond timestamp, bumped past `latest` when
    /// the clock has not advanced (or went backwards) since the last issue
    pub fn issue(now_millis: i64, latest: Option<TransactionId>) -> Self {
        match latest {
            Some(latest) if latest.0 >= now_millis => Self(latest.0.saturating_add(1)),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_uses_clock() {
        let id = TransactionId::issue(1_700_000_000_000, None);
        assert_eq!(id.raw(), 1_700_000_000_000);

        let id = TransactionId::issue(1_700_000_000_500, Some(TransactionId::from_raw(5)));
        assert_eq!(id.raw(), 1_700_000_000_500);
    }

    #[test]
    fn test_issue_never_reuses() {
        let latest = TransactionId::from_raw(1_700_000_000_003);
        assert_eq!(TransactionId::issue(1_700_000_000_003, Some(latest)).raw(), 1_700_000_000_004);
        assert_eq!(TransactionId::issue(1_600_000_000_000, Some(latest)).raw(), 1_700_000_000_004);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: TransactionId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(" 1700000000001 ".parse::<TransactionId>().unwrap().raw(), 1_700_000_000_001);
        assert!("txn-1".parse::<TransactionId>().is_err());
    }
}
