//! JSON storage for the expense book.
//!
//! The adapted types mirror the model with plain text fields; converting them
//! back re-validates everything read from disk.

pub use adapted::{JsonAdaptedExpense, JsonAdaptedTag};
pub use book::JsonSerializableExpenseBook;
pub use error::{Result, StorageError};
pub use json_storage::{ExpenseBookStorage, JsonExpenseBookStorage};

mod adapted;
mod book;
mod error;
mod json_storage;
