//! Money type for representing monetary values.
//!
//! Uses a cents-based integer representation to avoid the floating-point
//! rounding surprises that plague monetary calculations. The storefront
//! sells in a single currency (USD), so no currency tag is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use bloom_commerce::money::Money;
    /// let price = Money::from_decimal(29.99);
    /// assert_eq!(price.cents, 2999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiply by a quantity, saturating at the representable bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.cents.saturating_mul(quantity))
    }

    /// Add another amount, saturating at the representable bounds.
    pub fn plus(&self, other: Money) -> Money {
        Money::new(self.cents.saturating_add(other.cents))
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.plus(*m))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a fixed-point decimal string with two places (e.g., "59.98").
    pub fn amount(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.plus(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.cents.saturating_sub(other.cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::new(2999);
        assert_eq!(m.cents, 2999);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(29.99).cents, 2999);
        assert_eq!(Money::from_decimal(100.0).cents, 10000);
        assert_eq!(Money::from_decimal(0.1).cents, 10);
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(Money::zero().amount(), "0.00");
        assert_eq!(Money::new(5998).amount(), "59.98");
        assert_eq!(Money::new(5).amount(), "0.05");
        assert_eq!(Money::new(-150).amount(), "-1.50");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(2999).to_string(), "$29.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).cents, 1500);
        assert_eq!((a - b).cents, 500);
        assert_eq!((a * 3).cents, 3000);
    }

    #[test]
    fn test_multiplication_saturates() {
        let m = Money::new(i64::MAX / 2);
        assert_eq!(m.times(4).cents, i64::MAX);
    }

    #[test]
    fn test_sum() {
        let values = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(Money::sum(values.iter()).cents, 400);
        assert_eq!(Money::sum([].iter()).cents, 0);
    }
}
