//! # Money Module
//!
//! Provides the `Money` type for summing item prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Prices are stored as decimal strings: "1.25", "2.25", "30.25"         │
//! │                                                                         │
//! │  Summing them as f64:                                                   │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: parse each string straight into integer cents           │
//! │    "0.10" → 10, "0.20" → 20, 10 + 20 = 30 → "0.30"                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopping_core::money::Money;
//!
//! let price = Money::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! let total: Money = ["1.25", "2.25"]
//!     .iter()
//!     .map(|p| Money::parse(p).unwrap())
//!     .sum();
//! assert_eq!(total.to_string(), "3.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Number of fractional digits a stored price may carry.
pub const PRICE_SCALE: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: totals never go negative for prices, but subtraction
///   stays well-defined
/// - **Serialized as a decimal string**: matches how the store holds `price`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, failing instead of wrapping.
    pub fn checked_add(self, other: Money) -> CoreResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| CoreError::Overflow(format!("{self} + {other}")))
    }

    /// Parses a decimal price string into cents without going through floats.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "30"     → 3000
    /// "30.5"   → 3050
    /// "30.25"  → 3025
    /// ".75"    → 75
    /// "-1.50"  → -150
    /// ```
    ///
    /// ## Rejected
    /// Empty strings, stray characters, a second `.`, or more than
    /// [`PRICE_SCALE`] fractional digits.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(CoreError::invalid_price(value, "no digits"));
        }

        if let Some(bad) = whole.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(CoreError::invalid_price(
                value,
                format!("unexpected character '{}'", bad),
            ));
        }

        if frac.len() > PRICE_SCALE {
            return Err(CoreError::TooPrecise {
                value: value.to_string(),
                max: PRICE_SCALE,
            });
        }

        let overflow = || CoreError::Overflow(value.to_string());

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .map_err(|_| overflow())?
                .checked_mul(100)
                .ok_or_else(overflow)?
        };

        // Right-pad the fraction: "5" means 50 cents, not 5
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => frac.parse::<i64>().map_err(|_| overflow())?,
        };

        let cents = whole_cents.checked_add(frac_cents).ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as a plain two-decimal string, the same shape the store holds.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Money::parse("30").unwrap().cents(), 3000);
        assert_eq!(Money::parse("30.5").unwrap().cents(), 3050);
        assert_eq!(Money::parse("30.25").unwrap().cents(), 3025);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("-1.50").unwrap().cents(), -150);
        assert_eq!(Money::parse(" 2.25 ").unwrap().cents(), 225);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse(""),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Money::parse("."),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Money::parse("$3"),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Money::parse("1.2.3"),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Money::parse("1.255"),
            Err(CoreError::TooPrecise { max: 2, .. })
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(CoreError::Overflow(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_no_float_drift() {
        let total: Money = ["0.10", "0.20"].iter().map(|p| Money::parse(p).unwrap()).sum();
        assert_eq!(total.to_string(), "0.30");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(125);
        assert_eq!(a.checked_add(Money::from_cents(225)), Ok(Money::from_cents(350)));

        let big = Money::parse("90000000000000000").unwrap();
        assert!(matches!(big.checked_add(big), Err(CoreError::Overflow(_))));
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(325)).unwrap();
        assert_eq!(json, "\"3.25\"");

        let back: Money = serde_json::from_str("\"3.25\"").unwrap();
        assert_eq!(back.cents(), 325);

        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
    }
}
