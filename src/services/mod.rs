//! Service layer for Wallet Watch
//!
//! The service layer holds the behavior on top of the models and storage:
//! form validation, totals, and the command dispatcher that ties them together.

pub mod dispatcher;
pub mod input;
pub mod summary;

pub use dispatcher::{Command, Controller, Outcome, EDIT_NOTICE};
pub use input::{validate_form, FormState, ValidInput};
pub use summary::Summary;
