//! Application state for the TUI
//!
//! The App struct owns the session controller and the screen-only state
//! (focus, text cursors, selection, dialogs) needed for rendering and
//! handling events.

use tracing::error;

use crate::display::render::{LedgerView, RowView};
use crate::error::{WalletError, WalletResult};
use crate::services::{Command, Controller, Outcome};
use crate::storage::LoadSource;

use super::widgets::{Notification, TextInput};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Description,
    Amount,
    Type,
    Filter,
    List,
}

impl Focus {
    /// Next focus target (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Filter,
            Self::Filter => Self::List,
            Self::List => Self::Description,
        }
    }

    /// Previous focus target (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::List,
            Self::Amount => Self::Description,
            Self::Type => Self::Amount,
            Self::Filter => Self::Type,
            Self::List => Self::Filter,
        }
    }

    /// Whether typed characters go into a text field
    pub fn is_text(self) -> bool {
        matches!(self, Self::Description | Self::Amount)
    }

    /// Whether this target belongs to the entry form
    pub fn is_form(self) -> bool {
        matches!(self, Self::Description | Self::Amount | Self::Type)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking message; nothing else reacts until it is dismissed
    Alert(Notification),
}

/// Main application state
pub struct App {
    /// Session state and command router
    pub controller: Controller,

    /// Last rendered view
    pub view: LedgerView,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused screen element
    pub focus: Focus,

    /// Description field
    pub description_input: TextInput,

    /// Amount field
    pub amount_input: TextInput,

    /// Selected row in the list
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Transient status bar message
    pub status: Option<Notification>,
}

impl App {
    /// Create a new App instance around a started session
    pub fn new(controller: Controller) -> Self {
        let view = controller.render();
        let status = match controller.load_source() {
            LoadSource::Recovered { backup_key, .. } => Some(Notification::error(format!(
                "Saved data was unreadable; example entries loaded (copy kept in '{}')",
                backup_key
            ))),
            _ => None,
        };

        let mut app = Self {
            controller,
            view,
            should_quit: false,
            focus: Focus::default(),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Groceries"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            selected_index: 0,
            active_dialog: ActiveDialog::None,
            status,
        };
        app.pull_form();
        app.sync_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Run a command through the controller and refresh the screen
    ///
    /// Rejected input and unknown ids become alerts; storage failures are
    /// returned to the caller.
    pub fn run(&mut self, command: Command) -> WalletResult<Option<Outcome>> {
        self.push_form();
        match self.controller.dispatch(command) {
            Ok(outcome) => {
                self.view = outcome.view.clone();
                self.clamp_selection();
                self.pull_form();
                if let Some(notice) = &outcome.notice {
                    self.alert(Notification::info(notice.clone()));
                }
                Ok(Some(outcome))
            }
            Err(err @ (WalletError::Validation(_) | WalletError::NotFound { .. })) => {
                self.alert(Notification::error(err.alert_text()));
                Ok(None)
            }
            Err(err) => {
                error!("command {:?} failed: {}", command, err);
                Err(err)
            }
        }
    }

    /// Copy the text fields into the controller's form
    fn push_form(&mut self) {
        let form = self.controller.form_mut();
        form.description = self.description_input.value().to_string();
        form.amount = self.amount_input.value().to_string();
    }

    /// Copy the controller's form into the text fields
    fn pull_form(&mut self) {
        let form = self.controller.form();
        let (description, amount) = (form.description.clone(), form.amount.clone());
        if self.description_input.value() != description {
            self.description_input.set_content(description);
        }
        if self.amount_input.value() != amount {
            self.amount_input.set_content(amount);
        }
    }

    /// Move focus and update the text field highlight
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.description_input.focused = self.focus == Focus::Description;
        self.amount_input.focused = self.focus == Focus::Amount;
    }

    /// The text field under focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Description => Some(&mut self.description_input),
            Focus::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }

    /// Flip the form's type selector
    pub fn toggle_type(&mut self) {
        let form = self.controller.form_mut();
        form.kind = form.kind.toggled();
    }

    /// Row under the list cursor
    pub fn selected_row(&self) -> Option<&RowView> {
        self.view.rows.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.view.rows.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view.rows.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Whether an edit is in progress (form filled or original pending)
    pub fn is_editing(&self) -> bool {
        self.controller.pending_edit().is_some()
            || !self.description_input.value().is_empty()
            || !self.amount_input.value().is_empty()
    }

    /// Show a blocking alert
    pub fn alert(&mut self, notification: Notification) {
        self.active_dialog = ActiveDialog::Alert(notification);
    }

    /// Show a transient status message
    pub fn set_status(&mut self, notification: Notification) {
        self.status = Some(notification);
    }

    /// Drop the status message once it has expired
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::{MemorySlotStore, TransactionRepository};

    pub(crate) fn test_app() -> App {
        let repo = TransactionRepository::new(
            Box::new(MemorySlotStore::new()),
            "walletWatchTransactions",
        );
        App::new(Controller::open(repo, Settings::default()).unwrap())
    }

    #[test]
    fn test_new_app_shows_seed() {
        let app = test_app();
        assert_eq!(app.view.rows.len(), 3);
        assert_eq!(app.focus, Focus::Description);
        assert!(app.description_input.focused);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Description;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Description);
        assert_eq!(Focus::Description.prev(), Focus::List);
    }

    #[test]
    fn test_invalid_submit_alerts() {
        let mut app = test_app();
        let result = app.run(Command::Submit).unwrap();

        assert!(result.is_none());
        assert!(matches!(app.active_dialog, ActiveDialog::Alert(ref n)
            if n.message == crate::error::INVALID_INPUT_MESSAGE));
        assert_eq!(app.view.rows.len(), 3);
    }

    #[test]
    fn test_edit_fills_inputs() {
        let mut app = test_app();
        let food = app.view.rows[0].id;

        app.run(Command::Edit(food)).unwrap();

        assert_eq!(app.description_input.value(), "Food");
        assert_eq!(app.amount_input.value(), "20.00");
        assert_eq!(app.view.rows.len(), 2);
        assert!(app.has_dialog());
        assert!(app.is_editing());
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let mut app = test_app();
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 2);

        let id = app.selected_row().unwrap().id;
        app.run(Command::Delete(id)).unwrap();
        assert_eq!(app.selected_index, 1);
    }
}
