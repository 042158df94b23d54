//! Display projections
//!
//! `render` turns the ledger into a front-end neutral view; `text` formats
//! that view for the command line.

pub mod render;
pub mod text;

pub use render::{render_summary, render_view, LedgerView, RowAction, RowView, SummaryView};
pub use text::{format_ledger_view, format_summary};
