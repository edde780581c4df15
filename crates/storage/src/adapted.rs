//! JSON-friendly mirrors of the model types.
//!
//! Saving never fails: the model is already valid. Loading re-validates
//! every field and stops at the first violation.

use std::collections::BTreeSet;

use model::{Amount, Description, Expense, IllegalValue, Tag};
use serde::{Deserialize, Deserializer, Serialize};

/// Serde-friendly version of [`Expense`].
///
/// Text fields are optional so that a record with a missing or `null` field
/// still parses and is then rejected with a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedExpense {
    description: Option<String>,
    amount: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    tagged: Vec<JsonAdaptedTag>,
}

/// Serde-friendly version of [`Tag`], stored as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonAdaptedTag {
    tag_name: String,
}

impl JsonAdaptedExpense {
    pub fn new(
        description: Option<String>,
        amount: Option<String>,
        tagged: Vec<JsonAdaptedTag>,
    ) -> Self {
        Self {
            description,
            amount,
            tagged,
        }
    }

    /// Converts back into a model [`Expense`].
    ///
    /// Check order: tags, description, amount. Only the first failure is
    /// reported.
    pub fn to_model_type(&self) -> Result<Expense, IllegalValue> {
        let tags = self
            .tagged
            .iter()
            .map(JsonAdaptedTag::to_model_type)
            .collect::<Result<Vec<_>, _>>()?;

        let description = self
            .description
            .as_deref()
            .ok_or(IllegalValue::MissingField("Description"))?;
        let description = Description::new(description)?;

        let amount = self
            .amount
            .as_deref()
            .ok_or(IllegalValue::MissingField("Amount"))?;
        let amount = Amount::new(amount)?;

        let tags: BTreeSet<Tag> = tags.into_iter().collect();
        Ok(Expense::new(description, amount, tags))
    }
}

impl From<&Expense> for JsonAdaptedExpense {
    fn from(source: &Expense) -> Self {
        Self {
            description: Some(source.description().to_string()),
            amount: Some(source.amount().to_string()),
            tagged: source.tags().iter().map(JsonAdaptedTag::from).collect(),
        }
    }
}

impl JsonAdaptedTag {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
        }
    }

    pub fn to_model_type(&self) -> Result<Tag, IllegalValue> {
        Tag::new(&self.tag_name)
    }
}

impl From<&Tag> for JsonAdaptedTag {
    fn from(source: &Tag) -> Self {
        Self::new(source.name())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
