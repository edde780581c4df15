use std::fmt;

use crate::IllegalValue;

/// Label attached to an expense. Names are ASCII alphanumeric.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(name: &str) -> Result<Self, IllegalValue> {
        if !Self::is_valid(name) {
            return Err(IllegalValue::ConstraintViolation(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
