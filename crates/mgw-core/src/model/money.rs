//! Two-decimal money amounts held as integer cents

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{MgwError, Result};

/// A non-negative amount of money in cents
///
/// Text input goes through [`Money::parse_strict`]; the snapshot format
/// stores the amount as a JSON number of dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest storable amount, 9,999,999,999,999.99
    ///
    /// Snapshots hold dollars as an `f64`; below this bound every cent
    /// amount survives the write and re-read unchanged.
    pub const MAX: Money = Money(999_999_999_999_999);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a price as typed by the user
    ///
    /// Checks run cheapest first: empty, not a number, negative, and finally
    /// the requirement of exactly two digits after a decimal point. `"5.10"`
    /// and `"0.99"` pass; `"5"`, `"5.1"` and `"5.100"` do not.
    ///
    /// # Errors
    /// * `MissingFlag` - the value is empty
    /// * `NotANumber` - the value is not a plain decimal number, or too large
    /// * `NegativePrice` - the value is below zero
    /// * `BadPrecision` - the value lacks exactly two fraction digits
    pub fn parse_strict(raw: &str) -> Result<Money> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(MgwError::MissingFlag {
                flag: "-p/--price".to_string(),
            });
        }

        let not_a_number = || MgwError::NotANumber {
            value: value.to_string(),
        };

        let (negative, unsigned) = match value.as_bytes()[0] {
            b'-' => (true, &value[1..]),
            b'+' => (false, &value[1..]),
            _ => (false, value),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        let fraction_digits = fraction.unwrap_or("");

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole)
            || !all_digits(fraction_digits)
            || (whole.is_empty() && fraction_digits.is_empty())
        {
            return Err(not_a_number());
        }

        let is_zero = whole.bytes().chain(fraction_digits.bytes()).all(|b| b == b'0');
        if negative && !is_zero {
            return Err(MgwError::NegativePrice);
        }

        if fraction_digits.len() != 2 {
            return Err(MgwError::BadPrecision {
                value: value.to_string(),
            });
        }

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| not_a_number())?
        };
        let fraction_value: u64 = fraction_digits.parse().map_err(|_| not_a_number())?;

        whole_value
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_value))
            .filter(|&cents| cents <= Money::MAX.0)
            .map(Money)
            .ok_or_else(not_a_number)
    }

    /// Price of `quantity` units
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        if !dollars.is_finite() || dollars < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {}",
                dollars
            )));
        }
        let cents = dollars * 100.0;
        let whole = cents.round();
        // one unit of f64 rounding error at this magnitude, twice over
        let slack = (cents * f64::EPSILON * 2.0).max(1e-6);
        if (cents - whole).abs() > slack {
            return Err(de::Error::custom(format!(
                "price must have at most two decimal places, got {}",
                dollars
            )));
        }
        if whole > Money::MAX.0 as f64 {
            return Err(de::Error::custom(format!(
                "price exceeds the largest storable amount, got {}",
                dollars
            )));
        }
        Ok(Money(whole as u64))
    }
}
