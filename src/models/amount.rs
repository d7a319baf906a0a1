//! Amount type for currency values exchanged with the budget service
//!
//! The service stores amounts as integer cents. Users type decimals and the
//! JSON output shows decimals, so conversion happens at both edges.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An amount in integer cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an Amount from cents
    ///
    /// # Examples
    /// ```
    /// use actual_cli::models::Amount;
    /// let amount = Amount::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_decimal(), 10.5);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Convert a decimal amount to cents, rounding half up
    pub fn from_decimal(amount: f64) -> Self {
        Self(amount_to_integer(amount))
    }

    /// The amount as a decimal number
    pub fn to_decimal(&self) -> f64 {
        integer_to_amount(self.0)
    }

    /// Parse a decimal string such as "12.50", "-3" or "1e2"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        // Cents must fit in an i64; `as` would saturate silently.
        let cents = (value * 100.0 + 0.5).floor();
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(cents as i64))
    }
}

/// Decimal to integer cents with half-up rounding (`Math.round` semantics)
pub fn amount_to_integer(amount: f64) -> i64 {
    (amount * 100.0 + 0.5).floor() as i64
}

/// Integer cents to a decimal amount
pub fn integer_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// Output shows decimals; the wire format to the service uses `cents()`.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_to_integer() {
        assert_eq!(amount_to_integer(12.5), 1250);
        assert_eq!(amount_to_integer(-45.99), -4599);
        assert_eq!(amount_to_integer(0.1 + 0.2), 30);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(amount_to_integer(0.125), 13);
        assert_eq!(amount_to_integer(-0.125), -12);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Amount::parse("1e300").unwrap_err().to_string(),
            "Invalid amount: 1e300"
        );
        assert!(Amount::parse("-1e17").is_err());
        assert!(Amount::parse("inf").is_err());
        assert_eq!(Amount::parse("1e15").unwrap().cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn test_integer_to_amount() {
        assert_eq!(integer_to_amount(1250), 12.5);
        assert_eq!(integer_to_amount(-4599), -45.99);
        assert_eq!(integer_to_amount(0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap().cents(), 1250);
        assert_eq!(Amount::parse(" -3 ").unwrap().cents(), -300);
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(1050).to_string(), "10.50");
        assert_eq!(Amount::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_serializes_as_decimal() {
        let json = serde_json::to_string(&Amount::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }
}
