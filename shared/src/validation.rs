//! Presence and positivity checks for new expenses.
//!
//! The add form hands over raw strings; everything that turns them into an
//! expense, and every reason to refuse one, lives here so the UI only has to
//! show the resulting message.

use crate::{Category, TrackerConfig, ValidationError};
use chrono::NaiveDate;

/// Raw contents of the add-expense form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    /// YYYY-MM-DD, as produced by `<input type="date">`
    pub date: String,
    /// Category key, empty when nothing is selected
    pub category: String,
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
}

impl ExpenseForm {
    /// An empty form with the date primed to `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Check every field, reporting the first problem found
    pub fn validate(&self, config: &TrackerConfig) -> Result<ValidatedExpense, ValidationError> {
        let name = validate_name(&self.name, config.max_name_length)?;

        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = validate_amount(parse_amount(&self.amount, &config.currency_symbol)?)?;

        let date_input = self.date.trim();
        if date_input.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date_input, "%Y-%m-%d")
            .map_err(|e| ValidationError::InvalidDate(e.to_string()))?;

        let category_input = self.category.trim();
        if category_input.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        Ok(ValidatedExpense {
            name,
            amount,
            date,
            category: Category::from(category_input),
        })
    }
}

/// Trim the name and check it is present and not too long
pub fn validate_name(name: &str, max_length: usize) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let length = trimmed.chars().count();
    if length > max_length {
        return Err(ValidationError::NameTooLong(length, max_length));
    }
    Ok(trimmed.to_string())
}

/// Amounts must be finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(format!("{} is not a number", amount)));
    }
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

/// Parse amount input, tolerating a currency symbol, thousands separators
/// and stray spaces
pub fn parse_amount(input: &str, currency_symbol: &str) -> Result<f64, ValidationError> {
    let mut cleaned = input.trim().to_string();
    if !currency_symbol.is_empty() {
        cleaned = cleaned.replace(currency_symbol, "");
    }
    let cleaned = cleaned.replace(',', "").replace(' ', "");

    if cleaned.is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| ValidationError::InvalidAmount(e.to_string()))
}
