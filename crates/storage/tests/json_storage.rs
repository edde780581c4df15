use std::{collections::BTreeSet, path::PathBuf};

use model::{Amount, Description, Expense, ExpenseBook, IllegalValue, Tag};
use storage::{ExpenseBookStorage, JsonExpenseBookStorage, StorageError};
use uuid::Uuid;

fn test_dir() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/test_data")
        .join(Uuid::new_v4().to_string());
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn expense(description: &str, amount: &str, tags: &[&str]) -> Expense {
    Expense::new(
        Description::new(description).unwrap(),
        Amount::new(amount).unwrap(),
        tags.iter().map(|t| Tag::new(t).unwrap()).collect::<BTreeSet<_>>(),
    )
}

fn typical_book() -> ExpenseBook {
    ExpenseBook::with_expenses(vec![
        expense("Lunch", "12.50", &["food"]),
        expense("Train ticket", "23", &["travel", "work"]),
        expense("Coffee", "1.2", &[]),
    ])
    .unwrap()
}

#[test]
fn missing_file_reads_as_none() {
    let storage = JsonExpenseBookStorage::new(test_dir().join("missing.json"));
    assert!(storage.read_expense_book().unwrap().is_none());
}

#[test]
fn save_then_read_returns_same_book() {
    let path = test_dir().join("nested/dir/expensebook.json");
    let storage = JsonExpenseBookStorage::new(&path);
    let original = typical_book();

    storage.save_expense_book(&original).unwrap();
    let read_back = storage.read_expense_book().unwrap().unwrap();
    assert_eq!(read_back, original);

    // overwrite with a modified book
    let mut modified = original.clone();
    modified
        .add_expense(expense("Dinner", "30.00", &["food"]))
        .unwrap();
    modified
        .remove_expense(&expense("Coffee", "1.20", &[]))
        .unwrap();
    storage.save_expense_book(&modified).unwrap();
    assert_eq!(storage.read_expense_book().unwrap().unwrap(), modified);

    // explicit path variant
    let other = test_dir().join("other.json");
    storage.save_expense_book_to(&original, &other).unwrap();
    assert_eq!(
        storage.read_expense_book_from(&other).unwrap().unwrap(),
        original
    );
}

#[test]
fn saved_file_uses_text_fields() {
    let path = test_dir().join("expensebook.json");
    let storage = JsonExpenseBookStorage::new(&path);
    storage.save_expense_book(&typical_book()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["expenses"][0]["description"], "Lunch");
    assert_eq!(value["expenses"][0]["amount"], "12.50");
    assert_eq!(value["expenses"][1]["tagged"], serde_json::json!(["travel", "work"]));
    assert_eq!(value["expenses"][2]["amount"], "1.20");
}

#[test]
fn unreadable_path_is_io_error() {
    // a directory exists but cannot be read as a file
    let storage = JsonExpenseBookStorage::new(test_dir());
    assert!(matches!(
        storage.read_expense_book(),
        Err(StorageError::Io(_))
    ));
}

#[test]
fn malformed_json_is_json_error() {
    let path = test_dir().join("broken.json");
    std::fs::write(&path, "{ \"expenses\": [").unwrap();

    let storage = JsonExpenseBookStorage::new(&path);
    assert!(matches!(
        storage.read_expense_book(),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn invalid_expense_is_data_conversion_error() {
    let path = test_dir().join("invalid.json");
    std::fs::write(
        &path,
        r#"{ "expenses": [ { "description": "Lunch", "tagged": ["food"] } ] }"#,
    )
    .unwrap();

    let storage = JsonExpenseBookStorage::new(&path);
    match storage.read_expense_book() {
        Err(StorageError::DataConversion(err)) => {
            assert_eq!(err, IllegalValue::MissingField("Amount"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn duplicate_expenses_are_rejected() {
    let path = test_dir().join("duplicates.json");
    std::fs::write(
        &path,
        r#"{ "expenses": [
            { "description": "Lunch", "amount": "12.50", "tagged": [] },
            { "description": "Lunch", "amount": "12.50", "tagged": ["food"] }
        ] }"#,
    )
    .unwrap();

    let storage = JsonExpenseBookStorage::new(&path);
    assert!(matches!(
        storage.read_expense_book(),
        Err(StorageError::DataConversion(IllegalValue::DuplicateExpense))
    ));
}
