//! Transaction CLI commands
//!
//! Each command drives the same controller the interactive screen uses, so
//! validation, id issuing and persistence behave identically.

use clap::Subcommand;
use tracing::warn;

use crate::config::settings::EditMode;
use crate::display::{format_ledger_view, format_summary};
use crate::error::{WalletError, WalletResult};
use crate::models::{TransactionId, TransactionType, TypeFilter};
use crate::services::{Command, Controller};
use crate::storage::LoadSource;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount, e.g. "20" or "20.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "income")]
        kind: TransactionType,
    },
    /// List transactions and totals
    List {
        /// Show only one type (all, income, expense)
        #[arg(short, long)]
        filter: Option<TypeFilter>,
    },
    /// Show total income, expenses and net balance
    Summary,
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
    /// Edit a transaction (re-submitted with a new ID)
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    controller: &mut Controller,
    cmd: TransactionCommands,
) -> WalletResult<()> {
    // Example entries are written on first use so the ids printed now are
    // the ids the next run loads
    if *controller.load_source() != LoadSource::Persisted {
        controller.persist()?;
    }

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
        } => {
            let form = controller.form_mut();
            form.description = description;
            form.amount = amount;
            form.kind = kind;

            let outcome = controller.dispatch(Command::Submit)?;
            if let Some(txn) = &outcome.created {
                println!("Created transaction:");
                println!("  ID:          {}", txn.id);
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", txn.amount);
                println!("  Type:        {}", txn.kind.label());
                println!();
            }
            print!("{}", format_summary(&outcome.view.summary));
        }

        TransactionCommands::List { filter } => {
            let view = match filter {
                Some(filter) => controller.dispatch(Command::SetFilter(filter))?.view,
                None => controller.render(),
            };
            print!("{}", format_ledger_view(&view));
        }

        TransactionCommands::Summary => {
            print!("{}", format_summary(&controller.render().summary));
        }

        TransactionCommands::Delete { id } => {
            let outcome = controller.dispatch(Command::Delete(id))?;
            let removed = outcome
                .removed
                .ok_or_else(|| WalletError::transaction_not_found(id.to_string()))?;

            println!("Deleted transaction: {} ({})", removed.description, removed.amount);
            println!();
            print!("{}", format_summary(&outcome.view.summary));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
        } => {
            let loaded = controller.dispatch(Command::Edit(id))?;

            let form = controller.form_mut();
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(kind) = kind {
                form.kind = kind;
            }

            let outcome = controller.dispatch(Command::Submit).inspect_err(|_| {
                if controller.settings().edit_mode == EditMode::RemoveOnLoad {
                    if let Some(original) = &loaded.removed {
                        warn!(id = %original.id, "edit rejected after original was removed");
                        eprintln!(
                            "Warning: the original transaction '{}' ({}) was already removed.",
                            original.description, original.amount
                        );
                    }
                }
            })?;

            if let Some(txn) = &outcome.created {
                println!("Updated transaction:");
                println!("  ID:          {} (was {})", txn.id, id);
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", txn.amount);
                println!("  Type:        {}", txn.kind.label());
                println!();
            }
            print!("{}", format_summary(&outcome.view.summary));
        }
    }

    Ok(())
}
