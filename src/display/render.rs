//! List projection
//!
//! Projects the ledger through the current filter into rows ready for any
//! front end, and recomputes the totals over the unfiltered ledger.

use crate::models::{Ledger, TransactionId, TransactionType, TypeFilter};
use crate::services::summary::Summary;

/// Action attached to a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(TransactionId),
    Delete(TransactionId),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Edit",
            Self::Delete(_) => "Delete",
        }
    }
}

/// One visible list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TransactionId,
    pub description: String,
    /// Amount with currency symbol ("$20.00")
    pub amount: String,
    /// Uppercased type ("EXPENSE")
    pub type_label: &'static str,
    pub kind: TransactionType,
    pub actions: [RowAction; 2],
}

/// Totals formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total_income: String,
    pub total_expenses: String,
    pub net_balance: String,
    pub totals: Summary,
}

/// Everything the screen shows after a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub filter: TypeFilter,
    pub rows: Vec<RowView>,
    pub summary: SummaryView,
}

/// Render the ledger; a full replace, never an incremental diff
pub fn render_view(ledger: &Ledger, filter: TypeFilter, currency_symbol: &str) -> LedgerView {
    let rows = ledger
        .filtered(filter)
        .map(|txn| RowView {
            id: txn.id,
            description: txn.description.clone(),
            amount: txn.amount.format_with_symbol(currency_symbol),
            type_label: txn.kind.label(),
            kind: txn.kind,
            actions: [RowAction::Edit(txn.id), RowAction::Delete(txn.id)],
        })
        .collect();

    LedgerView {
        filter,
        rows,
        summary: render_summary(ledger, currency_symbol),
    }
}

/// Totals over every entry, regardless of any filter
pub fn render_summary(ledger: &Ledger, currency_symbol: &str) -> SummaryView {
    let totals = Summary::of(ledger.iter());
    SummaryView {
        total_income: totals.total_income.format_with_symbol(currency_symbol),
        total_expenses: totals.total_expenses.format_with_symbol(currency_symbol),
        net_balance: totals.net_balance.format_with_symbol(currency_symbol),
        totals,
    }
}
