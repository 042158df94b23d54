//! Totals over the whole ledger

use crate::models::{Money, Transaction, TransactionType};

/// Income, expense and net totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
}

impl Summary {
    /// Sum every transaction; callers pass the unfiltered ledger
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in transactions {
            let total = match txn.kind {
                TransactionType::Income => &mut total_income,
                TransactionType::Expense => &mut total_expenses,
            };
            *total = total.saturating_add(txn.amount);
        }

        Self {
            total_income,
            total_expenses,
            net_balance: total_income.saturating_sub(total_expenses),
        }
    }
}
