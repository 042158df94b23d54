//! Status bar view
//!
//! Shows the latest transient message and key hints for the focused element.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!(" {} ", status.message),
            Style::default().fg(status.notification_type.color()),
        ));
    }

    let hints = match app.focus {
        Focus::Description | Focus::Amount => " Tab:Next  Enter:Submit  Esc:Cancel  ^C:Quit ",
        Focus::Type => " ←/→:Toggle  Enter:Submit  Tab:Next  q:Quit ",
        Focus::Filter => " ←/→:Change  Tab:Next  q:Quit ",
        Focus::List => " j/k:Move  e:Edit  d:Delete  Tab:Next  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
