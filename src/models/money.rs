//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing many entries. Amounts are persisted as two-decimal text ("20.00").

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single entry may hold (999,999,999,999.99)
    pub const MAX: Money = Money(99_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use wallet_watch::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_fixed(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a decimal amount, rounding half-up to whole cents
    ///
    /// Accepts "150", "150.5", "12.345", "$20", ".75" and a leading "-".
    /// Exponents, grouping separators and trailing garbage are rejected, as
    /// is anything beyond [`Money::MAX`] in either direction.
    ///
    /// ```
    /// use wallet_watch::models::Money;
    /// assert_eq!(Money::parse("150").unwrap().cents(), 15000);
    /// assert_eq!(Money::parse("12.345").unwrap().cents(), 1235);
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let s = s.trim();

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow(s.to_string()))?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = i64::from(digits.next().is_some_and(|d| d >= 5));

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + round_up))
            .filter(|c| *c <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::Overflow(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Sum that clamps at the i64 bounds instead of overflowing
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Difference that clamps at the i64 bounds instead of overflowing
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Two-decimal text without a currency symbol ("20.00", "-5.10")
    pub fn to_fixed(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Format with a currency symbol; negatives keep the sign after the symbol ("$-5.10")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.to_fixed())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fixed())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Money::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-5010)), "$-50.10");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(28000).format_with_symbol("€"), "€280.00");
        assert_eq!(Money::from_cents(-7).format_with_symbol("$"), "$-0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.saturating_add(b).cents(), 1500);
        assert_eq!(a.saturating_sub(b).cents(), 500);
        assert_eq!(b.saturating_sub(a).cents(), -500);
    }

    #[test]
    fn test_arithmetic_clamps() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!(huge.saturating_add(Money::from_cents(70_000)), huge);
        assert_eq!(
            Money::from_cents(i64::MIN).saturating_sub(Money::from_cents(1)).cents(),
            i64::MIN
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("  7. ").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(Money::parse("12.345").unwrap().cents(), 1235);
        assert_eq!(Money::parse("12.344").unwrap().cents(), 1234);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
        assert_eq!(Money::parse("0.004").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", ".", "abc", "12abc", "1e3", "1,000", "--5", "1.2.3", "$"] {
            assert!(Money::parse(bad).is_err(), "accepted {bad:?}");
        }
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_parse_upper_bound() {
        assert_eq!(Money::parse("999999999999.99").unwrap(), Money::MAX);
        assert_eq!(Money::parse("999999999999.994").unwrap(), Money::MAX);
        for too_big in ["1000000000000", "999999999999.995", "92233720368547758"] {
            assert!(
                matches!(Money::parse(too_big), Err(MoneyParseError::Overflow(_))),
                "accepted {too_big:?}"
            );
        }
    }

    #[test]
    fn test_serializes_as_text() {
        let m = Money::from_cents(2000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"20.00\"");

        let deserialized: Money = serde_json::from_str("\"700.00\"").unwrap();
        assert_eq!(deserialized.cents(), 70000);
        assert!(serde_json::from_str::<Money>("\"lots\"").is_err());
        assert!(serde_json::from_str::<Money>("20").is_err());
    }
}
