//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing decimal prices as floats:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The catalog's decimal price is converted ONCE, at decode time.       │
//! │    Every cart total after that is exact integer arithmetic.             │
//! │    Two-decimal formatting happens only when building a label.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shelf_core::money::Money;
//!
//! let price = Money::try_from_decimal(109.95).unwrap();
//! assert_eq!(price.cents(), 10995);
//!
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "219.90");
//! assert_eq!(line_total.label("₹"), "₹219.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::error::{CoreError, CoreResult};
use crate::MAX_PRICE_CENTS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents / paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same representation as every other amount we sum
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: The catalog is single-currency; the symbol is display config
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount from the wire into cents.
    ///
    /// Rounds half away from zero to the nearest cent. Negative, non-finite
    /// and values above [`MAX_PRICE_CENTS`] are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(22.3).unwrap().cents(), 2230);
    /// assert_eq!(Money::try_from_decimal(0.125).unwrap().cents(), 13);
    /// assert!(Money::try_from_decimal(-1.0).is_err());
    /// assert!(Money::try_from_decimal(f64::NAN).is_err());
    /// assert!(Money::try_from_decimal(5e16).is_err());
    /// ```
    pub fn try_from_decimal(value: f64) -> CoreResult<Self> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled < 0.0 || scaled > MAX_PRICE_CENTS as f64 {
            return Err(CoreError::InvalidPrice {
                value: value.to_string(),
            });
        }
        Ok(Money(scaled as i64))
    }

    /// Returns the value as a decimal in major units.
    ///
    /// Only for encoding back to the wire format; never sum these.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a line-item quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the value with two decimals behind a currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).label("₹"), "₹10.00");
    /// ```
    pub fn label(&self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal rendering without a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating, like [`Money::multiply_quantity`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serde adapter that reads and writes `Money` as a decimal number.
///
/// ```rust,ignore
/// #[serde(with = "crate::money::as_decimal")]
/// pub price: Money,
/// ```
pub mod as_decimal {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::try_from_decimal(value).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
