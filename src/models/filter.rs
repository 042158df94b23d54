//! List filter selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::{Transaction, TransactionType};

/// Which entries the list shows. Never affects the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    /// Whether a transaction passes this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.kind == TransactionType::Income,
            Self::Expense => txn.kind == TransactionType::Expense,
        }
    }

    /// Next option in selector order (wraps)
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }

    /// Previous option in selector order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Expense,
            Self::Income => Self::All,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid filter '{}'. Use 'all', 'income' or 'expense'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};

    #[test]
    fn test_matches() {
        let income = Transaction::new(
            TransactionId::from_raw(1),
            "Allowance",
            Money::from_cents(70000),
            TransactionType::Income,
        );

        assert!(TypeFilter::All.matches(&income));
        assert!(TypeFilter::Income.matches(&income));
        assert!(!TypeFilter::Expense.matches(&income));
    }

    #[test]
    fn test_cycle() {
        assert_eq!(TypeFilter::All.next().next().next(), TypeFilter::All);
        assert_eq!(TypeFilter::All.prev(), TypeFilter::Expense);
        assert_eq!(TypeFilter::Income.next().prev(), TypeFilter::Income);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Income".parse::<TypeFilter>(), Ok(TypeFilter::Income));
        assert_eq!("ALL".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert!("both".parse::<TypeFilter>().is_err());
    }
}
