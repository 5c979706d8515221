//! Quantity type for quote line items
//!
//! Quantities are fractional (25.5 m², 1.75 hours) but must multiply with
//! unit prices without floating-point drift, so they are stored as integer
//! thousandths. The quantity × price product is the single rounding point in
//! the whole totals pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// A line-item quantity stored as thousandths (3 fractional digits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Create a quantity from thousandths
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create a quantity from a whole number
    pub const fn from_whole(units: i64) -> Self {
        Self(units * 1000)
    }

    /// Create a zero quantity
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value in thousandths
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Check if the quantity is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the quantity is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a unit price, rounding half-up to whole cents.
    ///
    /// The exact product has 3 + 2 = 5 fractional digits; it is computed in
    /// i128 and divided back down with half-up rounding, so the result is the
    /// correctly rounded 2-digit line total for any representable inputs.
    pub fn times(&self, unit_price: Money) -> Money {
        let raw = self.0 as i128 * unit_price.cents() as i128;
        let rounded = if raw >= 0 {
            (raw + 500) / 1000
        } else {
            (raw - 500) / 1000
        };
        Money::from_cents(rounded as i64)
    }

    /// Convert a float quantity to thousandths, rejecting NaN and infinity
    pub fn try_from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(value.to_string()));
        }
        let millis = (value * 1000.0).round();
        if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(millis as i64))
    }

    /// Parse a quantity from a decimal string ("25", "2.5", "0.125")
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let millis = if let Some((units_str, frac_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // The fractional part must be 0-3 ASCII digits; more would lose
            // precision, so it is rejected rather than truncated.
            if frac_str.len() > 3 || !frac_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let frac: i64 = if frac_str.is_empty() {
                0
            } else {
                let parsed: i64 = frac_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
                parsed * 10_i64.pow(3 - frac_str.len() as u32)
            };

            units * 1000 + frac
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 1000
        };

        Ok(Self(if negative { -millis } else { millis }))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 1000;
        let frac = (self.0 % 1000).abs();
        let sign = if self.0 < 0 && units == 0 { "-" } else { "" };

        if frac == 0 {
            write!(f, "{}{}", sign, units)
        } else {
            // Trim trailing zeros from the fractional part
            let mut frac_str = format!("{:03}", frac);
            while frac_str.ends_with('0') {
                frac_str.pop();
            }
            write!(f, "{}{}.{}", sign, units, frac_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Quantity::parse("25").unwrap().millis(), 25_000);
        assert_eq!(Quantity::parse("2.5").unwrap().millis(), 2_500);
        assert_eq!(Quantity::parse("0.125").unwrap().millis(), 125);
        assert_eq!(Quantity::parse("25.00").unwrap().millis(), 25_000);
        assert_eq!(Quantity::parse("-3").unwrap().millis(), -3_000);
        assert!(Quantity::parse("abc").is_err());
    }

    #[test]
    fn test_parse_multibyte_fraction_is_rejected() {
        // Must return an error, not panic on a non-char-boundary slice
        assert!(matches!(
            Quantity::parse("2.5€"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_more_than_three_fraction_digits() {
        // Beyond thousandths is rejected, never silently truncated
        assert!(matches!(
            Quantity::parse("0.1234"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_millis(25_000).to_string(), "25");
        assert_eq!(Quantity::from_millis(2_500).to_string(), "2.5");
        assert_eq!(Quantity::from_millis(125).to_string(), "0.125");
    }

    #[test]
    fn test_times_exact() {
        // 25 × $600.00 = $15,000.00
        let qty = Quantity::from_whole(25);
        assert_eq!(qty.times(Money::from_cents(60_000)).cents(), 1_500_000);
    }

    #[test]
    fn test_times_rounds_half_up() {
        // 0.125 × $1.00 = $0.125 -> rounds up to $0.13
        let qty = Quantity::from_millis(125);
        assert_eq!(qty.times(Money::from_cents(100)).cents(), 13);

        // 0.124 × $1.00 = $0.124 -> rounds down to $0.12
        let qty = Quantity::from_millis(124);
        assert_eq!(qty.times(Money::from_cents(100)).cents(), 12);
    }

    #[test]
    fn test_times_large_values_no_overflow() {
        // 1,000,000 × $1,000,000.00 stays exact through the i128 product
        let qty = Quantity::from_whole(1_000_000);
        let total = qty.times(Money::from_cents(100_000_000));
        assert_eq!(total.cents(), 100_000_000_000_000);
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Quantity::try_from_f64(2.5).unwrap().millis(), 2_500);
        assert!(Quantity::try_from_f64(f64::NAN).is_err());
        assert!(Quantity::try_from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_serialization() {
        let q = Quantity::from_millis(2_500);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "2500");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
