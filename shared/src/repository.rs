//! # Expense Repository
//!
//! The authoritative, in-memory list of expenses, most recent first.
//! Every mutation is mirrored to the [`ExpenseStore`] snapshot and bumps the
//! revision counter that views use to notice changes.

use crate::store::{ExpenseStore, StorageBackend};
use crate::validation::{validate_amount, validate_name};
use crate::{Category, Expense, ExpenseId, Totals, TrackerConfig, ValidationError};
use chrono::{NaiveDate, Utc};
use log::{error, info};

pub struct ExpenseRepository<B> {
    expenses: Vec<Expense>,
    store: ExpenseStore<B>,
    max_name_length: usize,
    last_issued_id: u64,
    revision: u64,
}

impl<B: StorageBackend> ExpenseRepository<B> {
    /// Rehydrate from the store's snapshot, or start empty if there is none
    pub fn load(store: ExpenseStore<B>, config: &TrackerConfig) -> Self {
        let expenses = store.load();
        let last_issued_id = expenses
            .iter()
            .filter_map(|expense| expense.id.as_millis())
            .max()
            .unwrap_or(0);

        info!("Expense repository ready with {} expenses", expenses.len());

        Self {
            expenses,
            store,
            max_name_length: config.max_name_length,
            last_issued_id,
            revision: 0,
        }
    }

    /// Record a new expense at the front of the list and return its id
    pub fn add(
        &mut self,
        name: &str,
        amount: f64,
        date: NaiveDate,
        category: Category,
    ) -> Result<ExpenseId, ValidationError> {
        let name = validate_name(name, self.max_name_length)?;
        let amount = validate_amount(amount)?;

        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = ExpenseId::next_after(now, self.last_issued_id);
        if let Some(millis) = id.as_millis() {
            self.last_issued_id = millis;
        }

        info!("Adding expense {} '{}' ({:.2}, {})", id, name, amount, category.key());

        self.expenses.insert(
            0,
            Expense {
                id: id.clone(),
                name,
                amount,
                date,
                category,
            },
        );
        self.changed();

        Ok(id)
    }

    /// Remove the expense with `id`. Returns false, and touches nothing, if
    /// there is no such expense.
    pub fn remove_by_id(&mut self, id: &ExpenseId) -> bool {
        let Some(position) = self.expenses.iter().position(|expense| &expense.id == id) else {
            info!("Ignoring removal of unknown expense {}", id);
            return false;
        };

        let removed = self.expenses.remove(position);
        info!("Removed expense {} '{}'", removed.id, removed.name);
        self.changed();
        true
    }

    /// Drop every expense
    pub fn reset(&mut self) {
        info!("Resetting {} expenses", self.expenses.len());
        self.expenses.clear();
        self.changed();
    }

    /// All expenses, most recent first
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| &expense.id == id)
    }

    /// Sum and count over the full list
    pub fn totals(&self) -> Totals {
        Totals::of(&self.expenses)
    }

    /// Bumped on every change notification
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Persist and signal. A failed save is logged and the in-memory list
    /// stays authoritative.
    fn changed(&mut self) {
        if let Err(e) = self.store.save(&self.expenses) {
            error!("Failed to persist expenses: {}", e);
        }
        self.revision += 1;
    }
}
