//! Summary boxes
//!
//! Total income, total expenses and net balance over the whole ledger.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::summary_boxes;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.view.summary;
    let balance_color = if summary.totals.net_balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };

    let boxes = [
        ("Total Income", summary.total_income.as_str(), Color::Green),
        ("Total Expenses", summary.total_expenses.as_str(), Color::Red),
        ("Net Balance", summary.net_balance.as_str(), balance_color),
    ];

    for ((title, value, color), rect) in boxes.into_iter().zip(summary_boxes(area)) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, rect);
    }
}
