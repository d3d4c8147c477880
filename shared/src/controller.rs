//! # Interaction Controller
//!
//! Connects user actions to the repository and produces the view the UI
//! draws. Deletes and resets each go through a two-state confirmation flow:
//! requesting one only opens a prompt, and nothing changes until the user
//! confirms.
//!
//! Deletes always target an expense id, never a row position, so a prompt
//! opened from a filtered view still removes the right expense.

use crate::filter::{filter, SearchQuery};
use crate::store::{ExpenseStore, StorageBackend};
use crate::table::{EmptyState, ExpenseTable, Summary, TableRenderer};
use crate::validation::ExpenseForm;
use crate::{Category, ExpenseId, ExpenseRepository, TrackerConfig, ValidationError};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    PendingDelete(ExpenseId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetConfirmation {
    #[default]
    Idle,
    PendingReset,
}

/// Contents of the open delete prompt
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePrompt {
    pub id: ExpenseId,
    pub name: String,
}

/// Everything the UI needs for one draw
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerView {
    pub full_table: ExpenseTable,
    /// Present only while a search term or category is set
    pub filtered_table: Option<ExpenseTable>,
    pub summary: Summary,
    pub delete_prompt: Option<DeletePrompt>,
    pub reset_prompt: bool,
}

impl ControllerView {
    /// The table to show: the filtered view when a search is active,
    /// otherwise the full list
    pub fn active_table(&self) -> &ExpenseTable {
        self.filtered_table.as_ref().unwrap_or(&self.full_table)
    }
}

pub struct ExpenseController<B> {
    repository: ExpenseRepository<B>,
    renderer: TableRenderer,
    config: TrackerConfig,
    query: SearchQuery,
    delete: DeleteConfirmation,
    reset: ResetConfirmation,
}

impl<B: StorageBackend> ExpenseController<B> {
    /// Open the store under the configured key and rehydrate from it
    pub fn load(backend: B, config: TrackerConfig) -> Self {
        let store = ExpenseStore::new(backend, config.storage_key.clone());
        let repository = ExpenseRepository::load(store, &config);
        Self::new(repository, config)
    }

    pub fn new(repository: ExpenseRepository<B>, config: TrackerConfig) -> Self {
        Self {
            repository,
            renderer: TableRenderer::new(&config),
            config,
            query: SearchQuery::default(),
            delete: DeleteConfirmation::Idle,
            reset: ResetConfirmation::Idle,
        }
    }

    /// Validate the add form and record the expense. On error nothing is
    /// changed and the error's text is meant for the user.
    pub fn submit(&mut self, form: &ExpenseForm) -> Result<ExpenseId, ValidationError> {
        let expense = form.validate(&self.config).map_err(|e| {
            debug!("Rejected add form: {}", e);
            e
        })?;
        self.repository
            .add(&expense.name, expense.amount, expense.date, expense.category)
    }

    /// Open the delete prompt for `id`. Unknown ids leave the flow idle.
    pub fn request_delete(&mut self, id: ExpenseId) -> bool {
        if self.repository.find(&id).is_none() {
            debug!("Delete requested for unknown expense {}", id);
            return false;
        }
        self.delete = DeleteConfirmation::PendingDelete(id);
        true
    }

    /// Delete the pending expense and close the prompt. Returns whether an
    /// expense was removed; confirming with no prompt open does nothing.
    pub fn confirm_delete(&mut self) -> bool {
        match std::mem::take(&mut self.delete) {
            DeleteConfirmation::PendingDelete(id) => self.repository.remove_by_id(&id),
            DeleteConfirmation::Idle => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        if let DeleteConfirmation::PendingDelete(id) = std::mem::take(&mut self.delete) {
            debug!("Delete of {} cancelled", id);
        }
    }

    pub fn request_reset(&mut self) {
        self.reset = ResetConfirmation::PendingReset;
    }

    /// Clear every expense if the reset prompt is open
    pub fn confirm_reset(&mut self) -> bool {
        match std::mem::take(&mut self.reset) {
            ResetConfirmation::PendingReset => {
                self.repository.reset();
                true
            }
            ResetConfirmation::Idle => false,
        }
    }

    pub fn cancel_reset(&mut self) {
        if self.reset == ResetConfirmation::PendingReset {
            info!("Reset cancelled");
        }
        self.reset = ResetConfirmation::Idle;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.query.category = category;
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn delete_state(&self) -> &DeleteConfirmation {
        &self.delete
    }

    pub fn reset_state(&self) -> ResetConfirmation {
        self.reset
    }

    pub fn repository(&self) -> &ExpenseRepository<B> {
        &self.repository
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Build the current view from scratch
    pub fn view(&self) -> ControllerView {
        let all = self.repository.all();

        let filtered_table = if self.query.is_active() {
            let filtered = filter(all, &self.query);
            Some(self.renderer.render(&filtered, EmptyState::NoMatches))
        } else {
            None
        };

        let delete_prompt = match &self.delete {
            DeleteConfirmation::PendingDelete(id) => {
                self.repository.find(id).map(|expense| DeletePrompt {
                    id: expense.id.clone(),
                    name: expense.name.clone(),
                })
            }
            DeleteConfirmation::Idle => None,
        };

        ControllerView {
            full_table: self.renderer.render(all, EmptyState::NoExpenses),
            filtered_table,
            summary: self.renderer.summary(self.repository.totals()),
            delete_prompt,
            reset_prompt: self.reset == ResetConfirmation::PendingReset,
        }
    }
}
