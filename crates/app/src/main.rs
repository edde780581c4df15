use clap::Parser;
use storage::{ExpenseBookStorage, JsonExpenseBookStorage};

use crate::{
    error::{AppError, Result},
    settings::{AppConfig, Args},
};

mod error;
mod settings;

fn main() -> Result<()> {
    let config = AppConfig::load(Args::parse())?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "billboard={level},storage={level},model={level}",
            level = config.level
        ))
        .init();

    let storage = JsonExpenseBookStorage::new(&config.data_path);
    let book = match storage.read_expense_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            tracing::info!(
                "{} not found, starting with an empty expense book",
                storage.file_path().display()
            );
            model::ExpenseBook::new()
        }
        Err(err) => {
            tracing::error!("failed to load expense book: {err}");
            return Err(err.into());
        }
    };

    for (index, expense) in book.expenses().iter().enumerate() {
        println!("{}. {expense}", index + 1);
    }
    let total = book.total().ok_or(AppError::TotalOverflow)?;
    println!("{} expenses, total {total}", book.len());

    Ok(())
}
