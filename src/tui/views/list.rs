//! Transaction list
//!
//! One row per visible entry, in ledger order, with the selected row
//! highlighted when the list has focus.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionType;
use crate::tui::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .title(format!(" Transactions ({}) ", app.view.filter))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

    if app.view.rows.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No transactions found.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let widths = [
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Amount
        Constraint::Length(9),  // Type
        Constraint::Length(15), // Actions
    ];

    let header = Row::new(vec![
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(Line::from("Amount").right_aligned())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .view
        .rows
        .iter()
        .map(|row| {
            let color = match row.kind {
                TransactionType::Income => Color::Green,
                TransactionType::Expense => Color::Red,
            };
            let actions = row
                .actions
                .iter()
                .map(|a| format!("[{}]", a.label()))
                .collect::<Vec<_>>()
                .join(" ");

            Row::new(vec![
                Cell::from(row.description.as_str()),
                Cell::from(Line::from(row.amount.as_str()).right_aligned())
                    .style(Style::default().fg(color)),
                Cell::from(row.type_label).style(Style::default().fg(color)),
                Cell::from(actions).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
