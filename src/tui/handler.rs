//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the active
//! dialog and the focused screen element.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::WalletResult;
use crate::services::Command;

use super::app::{App, Focus};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> WalletResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> WalletResult<()> {
    // The alert blocks everything else
    if app.has_dialog() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.close_dialog();
        }
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.set_focus(app.focus.next());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return Ok(());
        }
        KeyCode::Esc => {
            if app.is_editing() {
                app.run(Command::CancelEdit)?;
                app.set_status(Notification::info("Edit cancelled"));
            }
            return Ok(());
        }
        KeyCode::Enter if app.focus.is_form() => {
            return submit(app);
        }
        _ => {}
    }

    match app.focus {
        Focus::Description | Focus::Amount => handle_text_key(app, key),
        Focus::Type => handle_type_key(app, key),
        Focus::Filter => handle_filter_key(app, key)?,
        Focus::List => handle_list_key(app, key)?,
    }
    Ok(())
}

fn submit(app: &mut App) -> WalletResult<()> {
    if let Some(outcome) = app.run(Command::Submit)? {
        if let Some(created) = outcome.created {
            app.set_status(Notification::success(format!(
                "Added '{}'",
                created.description
            )));
        }
        app.set_focus(Focus::Description);
    }
    Ok(())
}

/// Keys while a text field has focus
fn handle_text_key(app: &mut App, key: KeyEvent) {
    let Some(input) = app.focused_input() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn handle_type_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => app.toggle_type(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) -> WalletResult<()> {
    let current = app.controller.filter();
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => {
            app.run(Command::SetFilter(current.next()))?;
        }
        KeyCode::Left => {
            app.run(Command::SetFilter(current.prev()))?;
        }
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
    Ok(())
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> WalletResult<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(id) = app.selected_row().map(|row| row.id) {
                if app.run(Command::Edit(id))?.is_some() {
                    app.set_focus(Focus::Description);
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(id) = app.selected_row().map(|row| row.id) {
                if let Some(outcome) = app.run(Command::Delete(id))? {
                    if let Some(removed) = outcome.removed {
                        app.set_status(Notification::info(format!(
                            "Deleted '{}'",
                            removed.description
                        )));
                    }
                }
            }
        }
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
    Ok(())
}
