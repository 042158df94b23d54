//! Wallet Watch - personal income and expense tracker
//!
//! This library holds a session's ledger of transactions, validates entries
//! from a form, keeps running totals and a net balance, and persists the
//! ledger as JSON between sessions. The same controller drives both the
//! command line and the terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, transactions, the ledger, filters)
//! - `storage`: Key-value slots and the transaction repository
//! - `services`: Form validation, totals and the command dispatcher
//! - `display`: View projection and text formatting
//! - `cli`: Command-line handlers
//! - `tui`: Interactive terminal screen
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet_watch::config::{paths::WalletPaths, settings::Settings};
//! use wallet_watch::services::{Command, Controller};
//! use wallet_watch::storage::open_repository;
//!
//! let paths = WalletPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut controller = Controller::open(open_repository(&paths, &settings)?, settings)?;
//! let outcome = controller.dispatch(Command::Submit)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{WalletError, WalletResult};
