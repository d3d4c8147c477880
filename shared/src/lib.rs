use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod repository;
pub mod store;
pub mod table;
pub mod validation;

pub use config::TrackerConfig;
pub use controller::{
    ControllerView, DeleteConfirmation, DeletePrompt, ExpenseController, ResetConfirmation,
};
pub use error::{StoreError, ValidationError};
pub use filter::{filter, SearchQuery};
pub use repository::ExpenseRepository;
pub use store::{ExpenseStore, MemoryStorage, StorageBackend};
pub use table::{EmptyState, ExpenseRow, ExpenseTable, Summary, TableRenderer};
pub use validation::{ExpenseForm, ValidatedExpense};

/// A single tracked spending entry.
///
/// Field names match the persisted JSON layout, so a snapshot written by
/// earlier versions of the app deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    /// Always finite and positive for records created through the repository
    pub amount: f64,
    /// Calendar date, persisted as YYYY-MM-DD
    pub date: NaiveDate,
    pub category: Category,
}

/// Identity of an expense.
///
/// New ids are epoch milliseconds. Snapshots may also carry other JSON
/// numbers (negative or fractional) and string tokens, which are kept as-is
/// and written back in the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    Millis(u64),
    Number(serde_json::Number),
    Token(String),
}

impl ExpenseId {
    /// Pick the next id given the current clock and the largest numeric id
    /// handed out so far. Ids stay strictly increasing even when two expenses
    /// are added within the same millisecond or the clock goes backwards.
    pub fn next_after(epoch_millis: u64, last_issued: u64) -> ExpenseId {
        ExpenseId::Millis(epoch_millis.max(last_issued.saturating_add(1)))
    }

    /// Numeric value of the id, if it has one
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            ExpenseId::Millis(millis) => Some(*millis),
            ExpenseId::Number(number) => number.as_u64(),
            ExpenseId::Token(token) => token.parse::<u64>().ok(),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseId::Millis(millis) => write!(f, "{}", millis),
            ExpenseId::Number(number) => write!(f, "{}", number),
            ExpenseId::Token(token) => write!(f, "{}", token),
        }
    }
}

/// Spending category.
///
/// Values outside the fixed set can only come from a persisted snapshot; they
/// are carried verbatim in `Unrecognized` and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Other,
    Unrecognized(String),
}

impl Category {
    /// The selectable categories, in the order the form lists them
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Shopping,
        Category::Other,
    ];

    /// Wire value, as stored in the snapshot and used by the `<select>`
    pub fn key(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Healthcare => "healthcare",
            Category::Shopping => "shopping",
            Category::Other => "other",
            Category::Unrecognized(raw) => raw,
        }
    }

    /// Human label shown in the table and the category selectors
    pub fn label(&self) -> &str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
            Category::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "entertainment" => Category::Entertainment,
            "utilities" => Category::Utilities,
            "healthcare" => Category::Healthcare,
            "shopping" => Category::Shopping,
            "other" => Category::Other,
            raw => Category::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregates over the full, unfiltered expense list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub amount: f64,
    pub count: usize,
}

impl Totals {
    pub fn of(expenses: &[Expense]) -> Totals {
        Totals {
            amount: expenses.iter().map(|expense| expense.amount).sum(),
            count: expenses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_uses_clock_when_ahead() {
        assert_eq!(
            ExpenseId::next_after(1704412800000, 0),
            ExpenseId::Millis(1704412800000)
        );
        assert_eq!(
            ExpenseId::next_after(1704412800005, 1704412800000),
            ExpenseId::Millis(1704412800005)
        );
    }

    #[test]
    fn test_next_id_never_repeats() {
        // Same millisecond
        assert_eq!(
            ExpenseId::next_after(1704412800000, 1704412800000),
            ExpenseId::Millis(1704412800001)
        );
        // Clock moved backwards
        assert_eq!(
            ExpenseId::next_after(1000, 1704412800000),
            ExpenseId::Millis(1704412800001)
        );
    }

    #[test]
    fn test_expense_id_as_millis() {
        assert_eq!(ExpenseId::Millis(42).as_millis(), Some(42));
        assert_eq!(
            ExpenseId::Token("1704412800000".to_string()).as_millis(),
            Some(1704412800000)
        );
        assert_eq!(ExpenseId::Token("abc-123".to_string()).as_millis(), None);
    }

    #[test]
    fn test_expense_id_accepts_numbers_and_strings() {
        let numeric: ExpenseId = serde_json::from_str("1704412800000").unwrap();
        assert_eq!(numeric, ExpenseId::Millis(1704412800000));

        let token: ExpenseId = serde_json::from_str("\"k9x2\"").unwrap();
        assert_eq!(token, ExpenseId::Token("k9x2".to_string()));

        assert_eq!(serde_json::to_string(&numeric).unwrap(), "1704412800000");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"k9x2\"");
    }

    #[test]
    fn test_expense_id_keeps_other_numbers() {
        for raw in ["1.5", "-3"] {
            let id: ExpenseId = serde_json::from_str(raw).unwrap();
            assert!(matches!(id, ExpenseId::Number(_)));
            assert_eq!(id.as_millis(), None);
            assert_eq!(id.to_string(), raw);
            assert_eq!(serde_json::to_string(&id).unwrap(), raw);
        }
    }

    #[test]
    fn test_category_keys_and_labels() {
        let expected = [
            ("food", "Food & Dining"),
            ("transport", "Transport"),
            ("entertainment", "Entertainment"),
            ("utilities", "Utilities"),
            ("healthcare", "Healthcare"),
            ("shopping", "Shopping"),
            ("other", "Other"),
        ];

        for (category, (key, label)) in Category::ALL.iter().zip(expected) {
            assert_eq!(category.key(), key);
            assert_eq!(category.label(), label);
            assert_eq!(&Category::from(key), category);
        }
    }

    #[test]
    fn test_unrecognized_category_passes_through() {
        let category = Category::from("pets");
        assert_eq!(category, Category::Unrecognized("pets".to_string()));
        assert_eq!(category.label(), "pets");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"pets\"");
    }

    #[test]
    fn test_expense_deserializes_with_extra_fields() {
        let json = r#"{"id":1704412800000,"name":"Coffee","amount":3.5,
            "date":"2024-01-05","category":"food","note":"ignored"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, ExpenseId::Millis(1704412800000));
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.amount, 3.5);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(expense.category, Category::Food);
    }

    #[test]
    fn test_totals() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expenses = vec![
            Expense {
                id: ExpenseId::Millis(2),
                name: "Lunch".to_string(),
                amount: 12.25,
                date,
                category: Category::Food,
            },
            Expense {
                id: ExpenseId::Millis(1),
                name: "Bus".to_string(),
                amount: 2.0,
                date,
                category: Category::Transport,
            },
        ];

        assert_eq!(Totals::of(&expenses), Totals { amount: 14.25, count: 2 });
        assert_eq!(Totals::of(&[]), Totals::default());
    }
}
