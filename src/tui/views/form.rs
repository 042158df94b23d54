//! Entry form
//!
//! Description and amount fields plus the income/expense selector.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionType;
use crate::tui::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.controller.pending_edit().is_some()
        || !app.description_input.value().is_empty();
    let title = if editing { " Edit Transaction " } else { " Add Transaction " };

    let border_color = if app.focus.is_form() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(&app.description_input, rows[0]);
    frame.render_widget(&app.amount_input, rows[1]);
    frame.render_widget(
        Paragraph::new(type_selector(app.controller.form().kind, app.focus == Focus::Type)),
        rows[2],
    );
}

/// "Type: [INCOME] EXPENSE" with the chosen option highlighted
fn type_selector(selected: TransactionType, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled("Type: ", Style::default().fg(Color::Cyan))];
    for kind in TransactionType::ALL {
        let style = if kind == selected {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if focused {
                base.fg(Color::Black).bg(Color::Cyan)
            } else {
                base.fg(Color::Yellow)
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
