pub mod expense_table;
pub mod search_bar;

pub use expense_table::ExpenseTableView;
pub use search_bar::SearchBar;
