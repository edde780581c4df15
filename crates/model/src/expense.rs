use std::{collections::BTreeSet, fmt};

use crate::{Amount, Description, Tag};

/// A single recorded expense.
///
/// The value is immutable once built: fields are only reachable through
/// borrowing getters. Two expenses are equal when description, amount and tag
/// set are all equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expense {
    description: Description,
    amount: Amount,
    tags: BTreeSet<Tag>,
}

impl Expense {
    pub fn new(description: Description, amount: Amount, tags: BTreeSet<Tag>) -> Self {
        Self {
            description,
            amount,
            tags,
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Weaker notion of identity than `==`: tags are ignored.
    ///
    /// The expense book uses it to reject duplicates.
    pub fn is_same_expense(&self, other: &Expense) -> bool {
        std::ptr::eq(self, other)
            || (self.description == other.description && self.amount == other.amount)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Amount: {} Tags: ", self.description, self.amount)?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(description: &str, amount: &str, tags: &[&str]) -> Expense {
        Expense::new(
            Description::new(description).unwrap(),
            Amount::new(amount).unwrap(),
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }

    fn lunch() -> Expense {
        expense("Lunch", "12.50", &["food"])
    }

    #[test]
    fn equals() {
        // same values
        assert_eq!(lunch(), expense("Lunch", "12.50", &["food"]));
        // amount written differently but same value
        assert_eq!(lunch(), expense("Lunch", "12.5", &["food"]));

        assert_ne!(lunch(), expense("Dinner", "12.50", &["food"]));
        assert_ne!(lunch(), expense("Lunch", "13.00", &["food"]));
        assert_ne!(lunch(), expense("Lunch", "12.50", &["work"]));
        assert_ne!(lunch(), expense("Lunch", "12.50", &[]));
    }

    #[test]
    fn tag_order_does_not_matter() {
        assert_eq!(
            expense("Lunch", "12.50", &["food", "work"]),
            expense("Lunch", "12.50", &["work", "food"])
        );
    }

    #[test]
    fn is_same_expense() {
        let lunch = lunch();
        assert!(lunch.is_same_expense(&lunch));

        // different tags only
        assert!(lunch.is_same_expense(&expense("Lunch", "12.50", &["work", "team"])));

        assert!(!lunch.is_same_expense(&expense("Dinner", "12.50", &["food"])));
        assert!(!lunch.is_same_expense(&expense("Lunch", "9.99", &["food"])));
    }

    #[test]
    fn tags_are_read_only_view() {
        let lunch = expense("Lunch", "12.50", &["food", "food"]);
        assert_eq!(lunch.tags().len(), 1);
        assert!(lunch.tags().contains(&Tag::new("food").unwrap()));
    }

    #[test]
    fn display_lists_fields() {
        assert_eq!(
            expense("Lunch", "12.5", &["work", "food"]).to_string(),
            "Lunch Amount: 12.50 Tags: [food][work]"
        );
    }
}
