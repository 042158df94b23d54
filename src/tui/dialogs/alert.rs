//! Alert dialog
//!
//! Blocking message box; Enter or Esc dismisses it.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::Notification;

/// Render an alert dialog
pub fn render(frame: &mut Frame, notification: &Notification) {
    let area = centered_rect_fixed(60, 8, frame.area());
    let color = notification.notification_type.color();

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", notification.notification_type.title()))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(""),
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(color)),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
