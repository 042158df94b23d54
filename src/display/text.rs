//! Plain-text formatting of a rendered view for the command line

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use super::render::{LedgerView, SummaryView};

#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    type_label: String,
}

/// Format the visible list followed by the totals
pub fn format_ledger_view(view: &LedgerView) -> String {
    let mut output = String::new();

    output.push_str(&format!("Showing: {}\n", view.filter));
    if view.rows.is_empty() {
        output.push_str("No transactions found.\n");
    } else {
        let rows = view.rows.iter().map(|row| RowDisplay {
            id: row.id.to_string(),
            description: row.description.clone(),
            amount: row.amount.clone(),
            type_label: row.type_label.to_string(),
        });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.modify(Columns::single(2), Alignment::right());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&view.summary));
    output
}

/// Format the three totals, one per line
pub fn format_summary(summary: &SummaryView) -> String {
    format!(
        "Total Income:   {:>12}\nTotal Expenses: {:>12}\nNet Balance:    {:>12}\n",
        summary.total_income, summary.total_expenses, summary.net_balance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render::render_view;
    use crate::models::{Ledger, TypeFilter};
    use crate::storage::seed_transactions;

    #[test]
    fn test_format_view() {
        let ledger = Ledger::from_records(seed_transactions(0)).unwrap();
        let formatted = format_ledger_view(&render_view(&ledger, TypeFilter::All, "$"));

        assert!(formatted.contains("Showing: All"));
        assert!(formatted.contains("Allowance"));
        assert!(formatted.contains("$700.00"));
        assert!(formatted.contains("EXPENSE"));
        assert!(formatted.contains("Net Balance:"));
        assert!(formatted.contains("$280.00"));
    }

    #[test]
    fn test_format_empty_view() {
        let formatted = format_ledger_view(&render_view(&Ledger::new(), TypeFilter::Income, "$"));

        assert!(formatted.contains("No transactions found."));
        assert!(formatted.contains("$0.00"));
    }
}
