use std::{
    fs,
    path::{Path, PathBuf},
};

use model::ExpenseBook;

use crate::{JsonSerializableExpenseBook, error::Result};

/// Persistence of a whole [`ExpenseBook`].
pub trait ExpenseBookStorage {
    fn file_path(&self) -> &Path;

    /// Returns `Ok(None)` when no data file exists yet.
    fn read_expense_book(&self) -> Result<Option<ExpenseBook>>;

    fn save_expense_book(&self, book: &ExpenseBook) -> Result<()>;
}

/// Stores the expense book as pretty printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonExpenseBookStorage {
    file_path: PathBuf,
}

impl JsonExpenseBookStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn read_expense_book_from(&self, path: &Path) -> Result<Option<ExpenseBook>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("data file {} not found", path.display());
                return Ok(None);
            }
            Err(err) => {
                tracing::warn!("failed to read data file {}: {err}", path.display());
                return Err(err.into());
            }
        };

        let serialized: JsonSerializableExpenseBook =
            serde_json::from_str(&content).inspect_err(|err| {
                tracing::warn!("data file {} is not valid JSON: {err}", path.display());
            })?;
        let book = serialized.to_model_type().inspect_err(|err| {
            tracing::warn!("illegal values found in {}: {err}", path.display());
        })?;

        tracing::debug!("loaded {} expenses from {}", book.len(), path.display());
        Ok(Some(book))
    }

    pub fn save_expense_book_to(&self, book: &ExpenseBook, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&JsonSerializableExpenseBook::from(book))?;
        fs::write(path, payload)?;
        tracing::debug!("saved {} expenses to {}", book.len(), path.display());
        Ok(())
    }
}

impl ExpenseBookStorage for JsonExpenseBookStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_expense_book(&self) -> Result<Option<ExpenseBook>> {
        self.read_expense_book_from(&self.file_path)
    }

    fn save_expense_book(&self, book: &ExpenseBook) -> Result<()> {
        self.save_expense_book_to(book, &self.file_path)
    }
}
