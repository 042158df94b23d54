//! Command dispatcher
//!
//! The [`Controller`] owns all session state (ledger, form, filter) and routes
//! each user action to a ledger mutation, a re-render and a save. Every
//! command runs to completion before the next one; a rejected command leaves
//! all state as it was.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::settings::{EditMode, Settings};
use crate::display::render::{render_view, LedgerView};
use crate::error::{WalletError, WalletResult};
use crate::models::{Ledger, Transaction, TransactionId, TypeFilter};
use crate::storage::{LoadSource, TransactionRepository};

use super::input::{validate_form, FormState};

/// Notice shown after an entry is loaded into the form
pub const EDIT_NOTICE: &str = "Item data loaded into form. Please edit and click SUBMIT to save.";

/// A user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Validate the form and append a new entry
    Submit,
    /// Remove an entry
    Delete(TransactionId),
    /// Load an entry into the form for re-submission
    Edit(TransactionId),
    /// Change which entries the list shows
    SetFilter(TypeFilter),
    /// Reset the form and drop any edit in progress
    CancelEdit,
}

/// What a successful command produced
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The freshly rendered screen
    pub view: LedgerView,
    /// Message to show the user, if any
    pub notice: Option<String>,
    /// Entry appended by the command
    pub created: Option<Transaction>,
    /// Entry removed from the ledger by the command
    pub removed: Option<Transaction>,
}

impl Outcome {
    fn rendered(view: LedgerView) -> Self {
        Self {
            view,
            notice: None,
            created: None,
            removed: None,
        }
    }
}

type Clock = Box<dyn Fn() -> i64>;

/// Session state and the event router over it
pub struct Controller {
    ledger: Ledger,
    form: FormState,
    filter: TypeFilter,
    /// Entry being edited while `EditMode::RemoveOnSubmit` defers its removal
    pending_edit: Option<Transaction>,
    repository: TransactionRepository,
    settings: Settings,
    load_source: LoadSource,
    clock: Clock,
}

impl Controller {
    /// Load the ledger and start a session
    pub fn open(repository: TransactionRepository, settings: Settings) -> WalletResult<Self> {
        Self::open_with_clock(repository, settings, Box::new(|| Utc::now().timestamp_millis()))
    }

    /// Start a session with a custom millisecond clock (used for ids)
    pub fn open_with_clock(
        mut repository: TransactionRepository,
        settings: Settings,
        clock: Clock,
    ) -> WalletResult<Self> {
        let loaded = repository.load(clock())?;
        info!(
            count = loaded.ledger.len(),
            source = ?loaded.source,
            "session started"
        );

        Ok(Self {
            ledger: loaded.ledger,
            form: FormState::default(),
            filter: settings.default_filter,
            pending_edit: None,
            repository,
            settings,
            load_source: loaded.source,
            clock,
        })
    }

    /// Route one command
    pub fn dispatch(&mut self, command: Command) -> WalletResult<Outcome> {
        match command {
            Command::Submit => self.submit(),
            Command::Delete(id) => self.delete(id),
            Command::Edit(id) => self.edit(id),
            Command::SetFilter(filter) => Ok(self.set_filter(filter)),
            Command::CancelEdit => Ok(self.cancel_edit()),
        }
    }

    fn submit(&mut self) -> WalletResult<Outcome> {
        let input = validate_form(&self.form).inspect_err(|_| {
            info!(form = ?self.form, "rejected form submission");
        })?;

        let replaced = match (self.settings.edit_mode, self.pending_edit.take()) {
            (EditMode::RemoveOnSubmit, Some(original)) => self.ledger.remove(original.id),
            _ => None,
        };

        let id = self.ledger.issue_id((self.clock)());
        let txn = input.into_transaction(id);
        self.ledger
            .push(txn.clone())
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        self.form = FormState::default();

        let view = self.render();
        self.persist()?;
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");

        Ok(Outcome {
            created: Some(txn),
            removed: replaced,
            ..Outcome::rendered(view)
        })
    }

    fn delete(&mut self, id: TransactionId) -> WalletResult<Outcome> {
        let removed = self.ledger.remove(id);
        if self.pending_edit.as_ref().is_some_and(|p| p.id == id) {
            self.pending_edit = None;
        }

        let view = self.render();
        self.persist()?;
        match &removed {
            Some(txn) => info!(id = %txn.id, "deleted transaction"),
            None => debug!(%id, "delete matched nothing"),
        }

        Ok(Outcome {
            removed,
            ..Outcome::rendered(view)
        })
    }

    fn edit(&mut self, id: TransactionId) -> WalletResult<Outcome> {
        let original = self
            .ledger
            .find(id)
            .cloned()
            .ok_or_else(|| WalletError::transaction_not_found(id.to_string()))?;

        self.form = FormState::from_transaction(&original);
        let removed = match self.settings.edit_mode {
            EditMode::RemoveOnLoad => {
                self.pending_edit = None;
                self.ledger.remove(id)
            }
            EditMode::RemoveOnSubmit => {
                self.pending_edit = Some(original);
                None
            }
        };

        let view = self.render();
        if removed.is_some() {
            self.persist()?;
        }
        info!(%id, mode = ?self.settings.edit_mode, "loaded transaction into form");

        Ok(Outcome {
            notice: Some(EDIT_NOTICE.to_string()),
            removed,
            ..Outcome::rendered(view)
        })
    }

    fn set_filter(&mut self, filter: TypeFilter) -> Outcome {
        self.filter = filter;
        debug!(%filter, "filter changed");
        Outcome::rendered(self.render())
    }

    fn cancel_edit(&mut self) -> Outcome {
        self.form = FormState::default();
        if let Some(pending) = self.pending_edit.take() {
            debug!(id = %pending.id, "edit abandoned, original kept");
        }
        Outcome::rendered(self.render())
    }

    /// Render the current state
    pub fn render(&self) -> LedgerView {
        render_view(&self.ledger, self.filter, &self.settings.currency_symbol)
    }

    /// Write the full ledger to its slot
    pub fn persist(&mut self) -> WalletResult<()> {
        self.repository.save(&self.ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Form fields are edited in place before a `Submit`
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    /// Entry waiting to be replaced, in `remove-on-submit` mode
    pub fn pending_edit(&self) -> Option<&Transaction> {
        self.pending_edit.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// How the ledger was obtained when the session started
    pub fn load_source(&self) -> &LoadSource {
        &self.load_source
    }

    pub fn repository(&self) -> &TransactionRepository {
        &self.repository
    }
}
