//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies. The storefront prices in New Taiwan dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    TWD,
    USD,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "TWD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::TWD => "TWD",
            Currency::USD => "USD",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "NT$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::TWD => "NT$",
            Currency::USD => "$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of smallest-unit digits per whole unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents for TWD).
/// Arithmetic saturates rather than wrapping; bounded cart quantities keep
/// realistic values far from the saturation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Sum an iterator of Money values, saturating on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }

    /// Format as a display string (e.g., "NT$2,980").
    ///
    /// Whole units are thousands-grouped; fractional cents are shown only
    /// when non-zero, matching how the storefront displays prices.
    pub fn display(&self) -> String {
        let divisor = 10_i64.pow(self.currency.decimal_places()).max(1);
        let units = self.amount_cents / divisor;
        let fraction = (self.amount_cents % divisor).abs();
        let grouped = group_thousands(units);
        if fraction == 0 {
            format!("{}{}", self.currency.symbol(), grouped)
        } else {
            let width = self.currency.decimal_places() as usize;
            format!(
                "{}{}.{:0width$}",
                self.currency.symbol(),
                grouped,
                fraction,
                width = width
            )
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
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

/// Insert thousands separators into a signed integer.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(298000, Currency::TWD);
        assert_eq!(m.amount_cents, 298000);
        assert_eq!(m.currency, Currency::TWD);
    }

    #[test]
    fn test_money_display_whole_units() {
        assert_eq!(Money::new(100, Currency::TWD).display(), "NT$1");
        assert_eq!(Money::new(1000, Currency::TWD).display(), "NT$10");
        assert_eq!(Money::new(298000, Currency::TWD).display(), "NT$2,980");
        assert_eq!(Money::new(1298000, Currency::TWD).display(), "NT$12,980");
    }

    #[test]
    fn test_money_display_fractional() {
        assert_eq!(Money::new(12345, Currency::TWD).display(), "NT$123.45");
        assert_eq!(Money::new(12305, Currency::TWD).display(), "NT$123.05");
    }

    #[test]
    fn test_money_display_zero_decimal_currency() {
        assert_eq!(Money::new(2980, Currency::JPY).display(), "\u{00a5}2,980");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::TWD);
        let b = Money::new(2500, Currency::TWD);
        assert_eq!((a + b).amount_cents, 3500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::TWD);
        assert_eq!(m.multiply(10).amount_cents, 10000);
        assert_eq!((m * 2).amount_cents, 2000);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let twd = Money::new(1000, Currency::TWD);
        let usd = Money::new(1000, Currency::USD);
        assert!(twd.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_add_overflow() {
        let a = Money::new(i64::MAX, Currency::TWD);
        let b = Money::new(1, Currency::TWD);
        assert!(a.try_add(&b).is_none());
    }

    #[test]
    fn test_sum() {
        let values = [
            Money::new(1000, Currency::TWD),
            Money::new(2500, Currency::TWD),
        ];
        let total = Money::sum(values.iter(), Currency::TWD);
        assert_eq!(total.amount_cents, 3500);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(980), "980");
        assert_eq!(group_thousands(2980), "2,980");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-2980), "-2,980");
    }
}
