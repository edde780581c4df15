use std::{fmt, str::FromStr};

use crate::IllegalValue;

/// Non-negative money amount represented as **integer cents**.
///
/// Cents avoid floating-point drift when expenses are summed.
///
/// # Examples
///
/// ```rust
/// use model::Amount;
///
/// let amount = Amount::new("12.5").unwrap();
/// assert_eq!(amount.cents(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
///
/// Only plain decimals are accepted (no sign, no spaces, at most two
/// decimals):
///
/// ```rust
/// use model::Amount;
///
/// assert!(Amount::is_valid("10"));
/// assert!(!Amount::is_valid("-10"));
/// assert!(!Amount::is_valid("12.345"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amounts should be non-negative numbers with at most two decimal places";

    /// Parses an amount, rejecting text that fails [`Amount::is_valid`].
    pub fn new(value: &str) -> Result<Self, IllegalValue> {
        parse_cents(value)
            .map(Self)
            .ok_or(IllegalValue::ConstraintViolation(Self::MESSAGE_CONSTRAINTS))
    }

    /// Returns `true` if `value` is a well formed amount.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        parse_cents(value).is_some()
    }

    /// Creates an amount from integer cents. Returns `None` for negative values.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Option<Self> {
        if cents < 0 { None } else { Some(Self(cents)) }
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

/// Parses `<digits>[.<d>[<d>]]` into cents.
fn parse_cents(s: &str) -> Option<i64> {
    let (units_str, frac_str) = match s.split_once('.') {
        Some((units, frac)) => (units, Some(frac)),
        None => (s, None),
    };

    if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let units: i64 = units_str.parse().ok()?;

    let cents: i64 = match frac_str {
        None => 0,
        Some(frac) => {
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            match frac.len() {
                1 => frac.parse::<i64>().ok()? * 10,
                2 => frac.parse::<i64>().ok()?,
                _ => return None,
            }
        }
    };

    units.checked_mul(100)?.checked_add(cents)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{units}.{cents:02}")
    }
}

impl FromStr for Amount {
    type Err = IllegalValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
