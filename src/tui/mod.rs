//! Terminal User Interface
//!
//! Interactive screen built on ratatui and crossterm: summary, entry form,
//! filter selector and transaction list over a single session controller.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
