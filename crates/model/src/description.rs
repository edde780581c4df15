use std::{fmt, str::FromStr};

use crate::IllegalValue;

/// Free-form text describing what an expense was for.
///
/// Any text is accepted as long as it is not empty and does not start with
/// whitespace.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Description(String);

impl Description {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Descriptions should not be blank and should not begin with whitespace";

    /// Builds a description, rejecting text that fails [`Description::is_valid`].
    pub fn new(value: &str) -> Result<Self, IllegalValue> {
        if !Self::is_valid(value) {
            return Err(IllegalValue::ConstraintViolation(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns `true` if `value` can be used as a description.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Description {
    type Err = IllegalValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
