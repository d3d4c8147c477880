//! Expense table domain logic.
//!
//! Turns expenses into ready-to-display rows and the summary line. The output
//! is plain data: the Yew components only lay it out, so everything the user
//! reads can be checked here without a browser.
//!
//! Rendering is a pure projection. The same input always gives the same
//! table, and nothing is remembered between calls.

use crate::{Category, Expense, ExpenseId, Totals, TrackerConfig};
use chrono::NaiveDate;

/// Column headings, in display order
pub const COLUMNS: [&str; 5] = ["Expense Name", "Amount", "Date", "Category", "Action"];

/// One formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category_label: String,
    /// CSS class for the category badge, e.g. `category-food`
    pub category_class: String,
}

/// What to show when there are no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been recorded yet
    NoExpenses,
    /// The search matched nothing
    NoMatches,
}

impl EmptyState {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            EmptyState::NoExpenses => Some("No expenses yet"),
            EmptyState::NoMatches => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoExpenses => "Start tracking by adding your first expense above",
            EmptyState::NoMatches => "No matching expenses found.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseTable {
    Rows(Vec<ExpenseRow>),
    Empty(EmptyState),
}

impl ExpenseTable {
    pub fn rows(&self) -> &[ExpenseRow] {
        match self {
            ExpenseTable::Rows(rows) => rows,
            ExpenseTable::Empty(_) => &[],
        }
    }
}

/// Summary fields, always describing the full list
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: String,
    pub item_count: usize,
}

/// Formats expenses for display
#[derive(Debug, Clone, PartialEq)]
pub struct TableRenderer {
    currency_symbol: String,
}

impl TableRenderer {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Build the table for `expenses`; `when_empty` picks the empty-state text
    pub fn render(&self, expenses: &[Expense], when_empty: EmptyState) -> ExpenseTable {
        if expenses.is_empty() {
            return ExpenseTable::Empty(when_empty);
        }
        ExpenseTable::Rows(expenses.iter().map(|expense| self.render_row(expense)).collect())
    }

    pub fn render_row(&self, expense: &Expense) -> ExpenseRow {
        ExpenseRow {
            id: expense.id.clone(),
            name: expense.name.clone(),
            amount: self.format_amount(expense.amount),
            date: format_date(expense.date),
            category_label: expense.category.label().to_string(),
            category_class: category_class(&expense.category),
        }
    }

    pub fn summary(&self, totals: Totals) -> Summary {
        Summary {
            total: self.format_amount(totals.amount),
            item_count: totals.count,
        }
    }

    /// Currency symbol followed by exactly two decimals, e.g. "₹3.50".
    /// Exact half-cent ties round away from zero (0.125 -> "0.13").
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, round_half_cent_ties(amount))
    }
}

// `{:.2}` rounds exact ties to even. A tie is only exact when the amount is a
// whole number of eighths, where both multiplications below are exact.
fn round_half_cent_ties(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        cents.round() / 100.0
    } else {
        amount
    }
}

/// "Jan 5, 2024", independent of the browser locale
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Badge class derived from the category's wire value; spaces in
/// unrecognized values become dashes so the class stays a single token
pub fn category_class(category: &Category) -> String {
    format!("category-{}", category.key().trim().replace(char::is_whitespace, "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Expense {
        Expense {
            id: ExpenseId::Millis(1704412800000),
            name: "Coffee".to_string(),
            amount: 3.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category: Category::Food,
        }
    }

    fn renderer() -> TableRenderer {
        TableRenderer::new(&TrackerConfig::default())
    }

    #[test]
    fn test_render_coffee_row() {
        let table = renderer().render(&[coffee()], EmptyState::NoExpenses);

        assert_eq!(
            table,
            ExpenseTable::Rows(vec![ExpenseRow {
                id: ExpenseId::Millis(1704412800000),
                name: "Coffee".to_string(),
                amount: "₹3.50".to_string(),
                date: "Jan 5, 2024".to_string(),
                category_label: "Food & Dining".to_string(),
                category_class: "category-food".to_string(),
            }])
        );
    }

    #[test]
    fn test_render_empty_states() {
        let full = renderer().render(&[], EmptyState::NoExpenses);
        assert_eq!(full, ExpenseTable::Empty(EmptyState::NoExpenses));
        assert!(full.rows().is_empty());
        assert_eq!(EmptyState::NoExpenses.title(), Some("No expenses yet"));

        let filtered = renderer().render(&[], EmptyState::NoMatches);
        assert_eq!(filtered, ExpenseTable::Empty(EmptyState::NoMatches));
        assert_eq!(EmptyState::NoMatches.message(), "No matching expenses found.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let expenses = vec![coffee()];
        let renderer = renderer();
        assert_eq!(
            renderer.render(&expenses, EmptyState::NoExpenses),
            renderer.render(&expenses, EmptyState::NoExpenses)
        );
    }

    #[test]
    fn test_unrecognized_category_renders_verbatim() {
        let mut expense = coffee();
        expense.category = Category::from("pet care");

        let row = renderer().render_row(&expense);

        assert_eq!(row.category_label, "pet care");
        assert_eq!(row.category_class, "category-pet-care");
    }

    #[test]
    fn test_format_amount() {
        let renderer = renderer();
        assert_eq!(renderer.format_amount(3.5), "₹3.50");
        assert_eq!(renderer.format_amount(1250.0), "₹1250.00");
        assert_eq!(renderer.format_amount(0.0), "₹0.00");

        let dollars = TableRenderer::new(&TrackerConfig {
            currency_symbol: "$".to_string(),
            ..TrackerConfig::default()
        });
        assert_eq!(dollars.format_amount(9.999), "$10.00");
    }

    #[test]
    fn test_format_amount_half_cent_ties_round_up() {
        let renderer = renderer();
        assert_eq!(renderer.format_amount(0.125), "₹0.13");
        assert_eq!(renderer.format_amount(0.375), "₹0.38");
        assert_eq!(renderer.format_amount(2.625), "₹2.63");
        // Not exact ties: the stored value sits just below the half cent
        assert_eq!(renderer.format_amount(1.005), "₹1.00");
        assert_eq!(renderer.format_amount(2.675), "₹2.67");
    }

    #[test]
    fn test_format_date() {
        let new_year = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "Jan 5, 2024");
        assert_eq!(format_date(new_year), "Dec 31, 2023");
    }

    #[test]
    fn test_summary() {
        let summary = renderer().summary(Totals { amount: 15.75, count: 3 });
        assert_eq!(summary, Summary { total: "₹15.75".to_string(), item_count: 3 });
    }
}
