pub mod confirm_modal;
pub mod expenses;
pub mod forms;
pub mod header;

pub use confirm_modal::ConfirmModal;
pub use header::Header;
