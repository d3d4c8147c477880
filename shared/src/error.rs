use thiserror::Error;

/// Rejected form input. The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter an expense name")]
    EmptyName,
    #[error("Expense name is too long ({0} characters). Maximum is {1}.")]
    NameTooLong(usize, usize),
    #[error("Please enter an amount")]
    MissingAmount,
    #[error("Please enter a valid amount (like 5 or 5.00): {0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Please pick a date")]
    MissingDate,
    #[error("Please enter the date as YYYY-MM-DD: {0}")]
    InvalidDate(String),
    #[error("Please choose a category")]
    MissingCategory,
}

/// Failures reading or writing the persisted snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to serialize expenses: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        let unavailable = StoreError::Unavailable("not supported by this browser".to_string());
        assert_eq!(
            unavailable.to_string(),
            "storage is unavailable: not supported by this browser"
        );

        let backend = StoreError::Backend("quota exceeded".to_string());
        assert_eq!(backend.to_string(), "storage backend error: quota exceeded");
    }
}
