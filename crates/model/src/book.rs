//! Ordered collection of expenses without duplicates.

use crate::{Amount, BookError, Expense};

type ResultBook<T> = Result<T, BookError>;

/// Every expense tracked by the application.
///
/// No two entries may satisfy [`Expense::is_same_expense`]. Insertion order is
/// preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `expenses`, rejecting duplicates.
    pub fn with_expenses(expenses: Vec<Expense>) -> ResultBook<Self> {
        let mut book = Self::new();
        book.set_expenses(expenses)?;
        Ok(book)
    }

    pub fn has_expense(&self, expense: &Expense) -> bool {
        self.expenses.iter().any(|e| e.is_same_expense(expense))
    }

    pub fn add_expense(&mut self, expense: Expense) -> ResultBook<()> {
        if self.has_expense(&expense) {
            return Err(BookError::DuplicateExpense);
        }
        self.expenses.push(expense);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    pub fn set_expense(&mut self, target: &Expense, edited: Expense) -> ResultBook<()> {
        let index = self
            .expenses
            .iter()
            .position(|e| e == target)
            .ok_or(BookError::ExpenseNotFound)?;

        if !target.is_same_expense(&edited) && self.has_expense(&edited) {
            return Err(BookError::DuplicateExpense);
        }
        self.expenses[index] = edited;
        Ok(())
    }

    pub fn remove_expense(&mut self, target: &Expense) -> ResultBook<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e == target)
            .ok_or(BookError::ExpenseNotFound)?;
        Ok(self.expenses.remove(index))
    }

    /// Replaces the whole content. The book is left untouched on error.
    pub fn set_expenses(&mut self, expenses: Vec<Expense>) -> ResultBook<()> {
        let has_duplicates = expenses
            .iter()
            .enumerate()
            .any(|(i, a)| expenses[i + 1..].iter().any(|b| a.is_same_expense(b)));
        if has_duplicates {
            return Err(BookError::DuplicateExpense);
        }
        self.expenses = expenses;
        Ok(())
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every amount. `None` on overflow.
    pub fn total(&self) -> Option<Amount> {
        self.expenses
            .iter()
            .try_fold(Amount::ZERO, |acc, e| acc.checked_add(e.amount()))
    }
}
