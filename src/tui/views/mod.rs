//! TUI Views module
//!
//! Summary boxes, the entry form, the filter selector, the transaction list
//! and the status bar.

pub mod filter;
pub mod form;
pub mod list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    form::render(frame, app, layout.form);
    filter::render(frame, app, layout.filter);
    list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if let ActiveDialog::Alert(notification) = &app.active_dialog {
        dialogs::alert::render(frame, notification);
    }
}
