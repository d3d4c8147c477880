//! Search over the expense list.

use crate::{Category, Expense};
use log::debug;

/// What the search box and the category selector currently hold
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub term: String,
    pub category: Option<Category>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    /// Map the category `<select>` value; the empty "all categories" option
    /// means no constraint
    pub fn category_from_select(value: &str) -> Option<Category> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Category::from(value))
        }
    }

    /// False when neither a term nor a category is set, in which case the
    /// full list is shown instead of a filtered view
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty() || self.category.is_some()
    }

    /// Whether a single expense satisfies both predicates
    pub fn matches(&self, expense: &Expense) -> bool {
        let term = self.term.trim().to_lowercase();
        matches_term(expense, &term) && self.matches_category(expense)
    }

    fn matches_category(&self, expense: &Expense) -> bool {
        match &self.category {
            Some(category) => &expense.category == category,
            None => true,
        }
    }
}

/// Expenses matching `query`, in their original order
pub fn filter(all: &[Expense], query: &SearchQuery) -> Vec<Expense> {
    let filtered: Vec<Expense> = all
        .iter()
        .filter(|expense| query.matches(expense))
        .cloned()
        .collect();

    debug!(
        "Filter '{}' / {:?} kept {} of {} expenses",
        query.term.trim(),
        query.category.as_ref().map(Category::key),
        filtered.len(),
        all.len()
    );
    filtered
}

/// Shortest decimal form of an amount, as a JavaScript number prints:
/// 3.5 -> "3.5", 10.0 -> "10", 1e-7 -> "1e-7", 1.5e21 -> "1.5e+21"
pub fn amount_text(amount: f64) -> String {
    let magnitude = amount.abs();
    if amount == 0.0 || !amount.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", amount);
    }

    let text = format!("{:e}", amount);
    match text.split_once('e') {
        Some((digits, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", digits, exponent)
        }
        _ => text,
    }
}

// `term` is already trimmed and lowercased
fn matches_term(expense: &Expense, term: &str) -> bool {
    term.is_empty()
        || expense.name.to_lowercase().contains(term)
        || amount_text(expense.amount).contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: u64, name: &str, amount: f64, category: Category) -> Expense {
        Expense {
            id: ExpenseId::Millis(id),
            name: name.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category,
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(4, "Coffee", 3.5, Category::Food),
            expense(3, "Bus Ticket", 2.0, Category::Transport),
            expense(2, "Cinema", 12.75, Category::Entertainment),
            expense(1, "Iced coffee", 4.25, Category::Food),
        ]
    }

    fn names(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_term_matches_name_case_insensitively() {
        let all = vec![
            expense(2, "Coffee", 3.5, Category::Food),
            expense(1, "Bus Ticket", 2.0, Category::Transport),
        ];

        let result = filter(&all, &SearchQuery::new("cof", None));

        assert_eq!(names(&result), vec!["Coffee"]);
    }

    #[test]
    fn test_term_is_trimmed_and_lowercased() {
        let result = filter(&sample(), &SearchQuery::new("  COFFEE ", None));
        assert_eq!(names(&result), vec!["Coffee", "Iced coffee"]);
    }

    #[test]
    fn test_term_matches_amount_text() {
        let cinema = filter(&sample(), &SearchQuery::new("12.7", None));
        assert_eq!(names(&cinema), vec!["Cinema"]);
        // 2.0 prints as "2", and "2" also appears in 12.75 and 4.25
        let twos = filter(&sample(), &SearchQuery::new("2", None));
        assert_eq!(names(&twos), vec!["Bus Ticket", "Cinema", "Iced coffee"]);
        assert!(filter(&sample(), &SearchQuery::new("2.0", None)).is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let all = sample();
        assert_eq!(filter(&all, &SearchQuery::default()), all);
        assert_eq!(filter(&all, &SearchQuery::new("   ", None)), all);
    }

    #[test]
    fn test_category_only() {
        let result = filter(&sample(), &SearchQuery::new("", Some(Category::Food)));
        assert_eq!(names(&result), vec!["Coffee", "Iced coffee"]);
    }

    #[test]
    fn test_term_and_category_combine() {
        let result = filter(&sample(), &SearchQuery::new("c", Some(Category::Entertainment)));
        assert_eq!(names(&result), vec!["Cinema"]);

        assert!(filter(&sample(), &SearchQuery::new("bus", Some(Category::Food))).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let query = SearchQuery::new("co", Some(Category::Food));
        let once = filter(&sample(), &query);
        let twice = filter(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unrecognized_category_filter() {
        let mut all = sample();
        all.push(expense(0, "Vet", 40.0, Category::from("pets")));

        let query = SearchQuery::new("", SearchQuery::category_from_select("pets"));
        assert_eq!(names(&filter(&all, &query)), vec!["Vet"]);
    }

    #[test]
    fn test_is_active() {
        assert!(!SearchQuery::default().is_active());
        assert!(!SearchQuery::new("  ", None).is_active());
        assert!(SearchQuery::new("cof", None).is_active());
        assert!(SearchQuery::new("", Some(Category::Other)).is_active());
    }

    #[test]
    fn test_category_from_select() {
        assert_eq!(SearchQuery::category_from_select(""), None);
        assert_eq!(SearchQuery::category_from_select("food"), Some(Category::Food));
    }

    #[test]
    fn test_matches_single_expense() {
        let query = SearchQuery::new("bus", Some(Category::Transport));
        let all = sample();
        assert!(query.matches(&all[1]));
        assert!(!query.matches(&all[0]));
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(3.5), "3.5");
        assert_eq!(amount_text(10.0), "10");
        assert_eq!(amount_text(0.1), "0.1");
        assert_eq!(amount_text(0.000001), "0.000001");
    }

    #[test]
    fn test_amount_text_exponent_ranges() {
        assert_eq!(amount_text(1e-7), "1e-7");
        assert_eq!(amount_text(2.5e-9), "2.5e-9");
        assert_eq!(amount_text(1e21), "1e+21");
        assert_eq!(amount_text(1.5e21), "1.5e+21");
        assert_eq!(amount_text(1e20), "100000000000000000000");
    }
}
