//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit the store prices in. Prices,
//! line totals and cart totals never pass through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency suffix used by the fixed display locale.
pub const CURRENCY_SYMBOL: &str = "\u{20bd}";

/// Digit group separator of the ru-RU locale (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// A monetary amount in minor units.
///
/// The storefront quotes whole roubles, so a price of `1990` displays as
/// `1 990 ₽`. Arithmetic saturates instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64) -> Self {
        Self { amount_minor }
    }

    /// Zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(quantity))
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn plus(&self, other: &Money) -> Money {
        Money::new(self.amount_minor.saturating_add(other.amount_minor))
    }

    /// Format for display in the store locale, e.g. `12 990 ₽`.
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), CURRENCY_SYMBOL)
    }

    /// Format the grouped amount without the currency suffix.
    pub fn display_amount(&self) -> String {
        let digits = self.amount_minor.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.amount_minor < 0 {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.plus(&other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
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
    fn test_money_from_minor() {
        let m = Money::new(4990);
        assert_eq!(m.amount_minor, 4990);
        assert!(m.is_positive());
    }

    #[test]
    fn test_money_display_grouping() {
        assert_eq!(Money::new(990).display(), "990 \u{20bd}");
        assert_eq!(Money::new(1990).display(), "1\u{a0}990 \u{20bd}");
        assert_eq!(Money::new(12990).display(), "12\u{a0}990 \u{20bd}");
        assert_eq!(Money::new(1234567).display_amount(), "1\u{a0}234\u{a0}567");
        assert_eq!(Money::new(-4990).display_amount(), "-4\u{a0}990");
        assert_eq!(Money::zero().display_amount(), "0");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::new(1990);
        assert_eq!(price * 2 + Money::new(4990), Money::new(8970));
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(650)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(1000));
    }

    #[test]
    fn test_money_saturates() {
        let huge = Money::new(i64::MAX);
        assert_eq!(huge.times(2), Money::new(i64::MAX));
        assert_eq!(huge + Money::new(1), Money::new(i64::MAX));
    }
}
