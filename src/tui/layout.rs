//! Layout definitions for the TUI
//!
//! Single column: summary on top, then the entry form, the filter selector,
//! the transaction list and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income / expenses / balance boxes
    pub summary: Rect,
    /// Description, amount and type fields
    pub form: Rect,
    /// Filter selector
    pub filter: Rect,
    /// Transaction list
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary
                Constraint::Length(5), // Form
                Constraint::Length(3), // Filter
                Constraint::Min(3),    // List
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            summary: chunks[0],
            form: chunks[1],
            filter: chunks[2],
            list: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Split the summary strip into three equal boxes
pub fn summary_boxes(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.summary.y, 0);
        assert_eq!(layout.form.y, 3);
        assert_eq!(layout.filter.y, 8);
        assert_eq!(layout.list.y, 11);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.list.height, 18);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(r.width, 40);
        assert_eq!(r.y, 5);
    }
}
