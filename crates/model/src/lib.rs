//! In-memory model of the expense tracker.
//!
//! Every field of an [`Expense`] is a small value type whose constructor
//! validates its input and fails with [`IllegalValue`].

pub use amount::Amount;
pub use book::ExpenseBook;
pub use description::Description;
pub use error::{BookError, IllegalValue};
pub use expense::Expense;
pub use tag::Tag;

mod amount;
mod book;
mod description;
mod error;
mod expense;
mod tag;
