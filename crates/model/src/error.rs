//! The module contains the errors the model can throw.
//!
//! The errors are:
//!
//! - [`IllegalValue`] thrown when stored or user supplied data cannot be
//!   turned into a valid model value.
//! - [`BookError`] thrown when an [`ExpenseBook`] mutation would break its
//!   uniqueness rule or targets an expense that is not there.
//!
//!  [`ExpenseBook`]: super::book::ExpenseBook
use thiserror::Error;

/// Data could not be converted into a valid model value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalValue {
    /// A required field is absent. Carries the field type name.
    #[error("Expense's {0} field is missing!")]
    MissingField(&'static str),
    /// A present field failed its format rule. Carries the canonical message.
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error("Expenses list contains duplicate expense(s).")]
    DuplicateExpense,
}

/// Expense book mutation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Operation would result in duplicate expenses")]
    DuplicateExpense,
    #[error("Expense not found!")]
    ExpenseNotFound,
}
