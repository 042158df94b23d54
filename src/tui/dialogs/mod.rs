//! Dialogs
//!
//! Modal overlays drawn above the main screen.

pub mod alert;
