//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so summation is exact and no
//! floating-point error can reach displayed totals. Conversion to a decimal
//! string happens only at the display boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use sitekick::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units and cents
    pub const fn from_major(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Convert a float amount (major units) to Money, rounding half-up to cents.
    ///
    /// Rejects NaN and infinite values instead of clamping them; float-typed
    /// amounts only enter through this function, so non-finite values can
    /// never reach the aggregation code.
    pub fn try_from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(value.to_string()));
        }
        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let cents = if let Some((units_str, frac_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // The fractional part must be 0-2 ASCII digits; anything beyond
            // two digits would lose precision, so it is rejected rather than
            // truncated.
            if frac_str.len() > 2 || !frac_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac
        } else {
            // Integer format - whole currency units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor())
        }
    }

    /// Format as a plain decimal string with 2 fractional digits ("70500.00")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.major().abs(), self.minor())
        } else {
            format!("{}.{:02}", self.major(), self.minor())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.major().abs(), self.minor())
        } else {
            write!(f, "${}.{:02}", self.major(), self.minor())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing and conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not finite: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
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
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor(), 50);
    }

    #[test]
    fn test_from_major() {
        let m = Money::from_major(10, 50);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("€"), "-€10.50");
        assert_eq!(Money::zero().format_with_symbol("kr"), "kr0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(7050000).to_decimal_string(), "70500.00");
        assert_eq!(Money::from_cents(-250).to_decimal_string(), "-2.50");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_multibyte_fraction_is_rejected() {
        // Must return an error, not panic on a non-char-boundary slice
        assert!(matches!(
            Money::parse("1.5€"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1.é"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_more_than_two_fraction_digits() {
        // Sub-cent input is rejected, never silently truncated
        assert!(matches!(
            Money::parse("1.999"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("1.005").is_err());
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Money::try_from_f64(10.50).unwrap().cents(), 1050);
        assert_eq!(Money::try_from_f64(0.0).unwrap().cents(), 0);
        assert!(matches!(
            Money::try_from_f64(f64::NAN),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::try_from_f64(f64::INFINITY),
            Err(MoneyParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
