//! Filter selector

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TypeFilter;
use crate::tui::app::{App, Focus};

const OPTIONS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Income, TypeFilter::Expense];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filter;
    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

    let spans: Vec<Span> = OPTIONS
        .iter()
        .flat_map(|option| {
            let style = if *option == app.view.filter {
                Style::default()
                    .fg(if focused { Color::Black } else { Color::Yellow })
                    .bg(if focused { Color::Cyan } else { Color::Reset })
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(format!(" {} ", option), style), Span::raw(" ")]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
