use model::{ExpenseBook, IllegalValue};
use serde::{Deserialize, Serialize};

use crate::JsonAdaptedExpense;

/// Serde-friendly version of [`ExpenseBook`]: `{ "expenses": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableExpenseBook {
    #[serde(default)]
    expenses: Vec<JsonAdaptedExpense>,
}

impl JsonSerializableExpenseBook {
    /// Converts every stored expense, in order, into an [`ExpenseBook`].
    ///
    /// Fails on the first invalid expense or on the first expense that
    /// duplicates an earlier one.
    pub fn to_model_type(&self) -> Result<ExpenseBook, IllegalValue> {
        let mut book = ExpenseBook::new();
        for adapted in &self.expenses {
            let expense = adapted.to_model_type()?;
            book.add_expense(expense)
                .map_err(|_| IllegalValue::DuplicateExpense)?;
        }
        Ok(book)
    }
}

impl From<&ExpenseBook> for JsonSerializableExpenseBook {
    fn from(source: &ExpenseBook) -> Self {
        Self {
            expenses: source
                .expenses()
                .iter()
                .map(JsonAdaptedExpense::from)
                .collect(),
        }
    }
}
