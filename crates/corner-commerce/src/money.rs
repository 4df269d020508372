//! Money type for cart amounts.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The shop trades
//! in US dollars only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A US dollar amount stored in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use corner_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }

    /// Multiply by a scalar, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents.saturating_mul(factor))
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_sub(other.cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.cents, 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99);
        assert_eq!(m.cents, 4999);

        let m = Money::from_decimal(15.0);
        assert_eq!(m.cents, 1500);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::from_cents(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(599).display(), "$5.99");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents, 1500);
        assert_eq!((a - b).cents, 500);
        assert_eq!((a * 3).cents, 3000);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [
            Money::from_cents(1500),
            Money::from_cents(2000),
            Money::from_cents(2200),
        ];
        assert_eq!(Money::sum(amounts.iter()).cents, 5700);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::from_cents(5000) >= Money::from_cents(5000));
        assert!(Money::from_cents(4999) < Money::from_cents(5000));
    }
}
