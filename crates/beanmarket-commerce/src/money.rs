//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies. All of them use two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Minor units per major unit.
    pub const MINOR_UNITS: i64 = 100;

    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
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
/// Amounts are stored in cents. Arithmetic used by the cart saturates instead
/// of overflowing so aggregate reads can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a USD amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Parse a plain decimal string such as `"25"`, `"25.5"` or `"24.99"`.
    ///
    /// A leading currency symbol `$` is accepted. More than two fractional
    /// digits is rejected rather than rounded.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidAmount(input.to_string());

        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(Currency::MINOR_UNITS)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$24.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "24.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let units = Currency::MINOR_UNITS as u64;
        format!("{}{}.{:02}", sign, abs / units, abs % units)
    }

    /// Add another amount, saturating at the numeric bounds.
    ///
    /// The currency of `self` is kept.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values into the given currency.
    pub fn sum<I>(iter: I, currency: Currency) -> Money
    where
        I: IntoIterator<Item = Money>,
    {
        iter.into_iter()
            .fold(Money::zero(currency), |acc, m| acc.saturating_add(&m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
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
    fn test_money_parse() {
        assert_eq!(Money::parse("25", Currency::USD).unwrap(), Money::usd(2500));
        assert_eq!(Money::parse("25.5", Currency::USD).unwrap(), Money::usd(2550));
        assert_eq!(Money::parse("$24.99", Currency::USD).unwrap(), Money::usd(2499));
        assert_eq!(Money::parse(".5", Currency::USD).unwrap(), Money::usd(50));
        assert_eq!(Money::parse("-1.25", Currency::USD).unwrap(), Money::usd(-125));
    }

    #[test]
    fn test_money_parse_rejects_garbage() {
        assert!(Money::parse("", Currency::USD).is_err());
        assert!(Money::parse("abc", Currency::USD).is_err());
        assert!(Money::parse("1.999", Currency::USD).is_err());
        assert!(Money::parse("1.2.3", Currency::USD).is_err());
        assert!(Money::parse(".", Currency::USD).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(6999).display(), "$69.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::new(2800, Currency::EUR).display(), "\u{20ac}28.00");
        assert_eq!(Money::usd(-150).display_amount(), "-1.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::usd(2250);
        assert_eq!((price * 2).amount_cents, 4500);
        assert_eq!((Money::usd(2499) + price * 2).amount_cents, 6999);
    }

    #[test]
    fn test_money_saturates() {
        let huge = Money::usd(i64::MAX);
        assert_eq!(huge.saturating_mul(3).amount_cents, i64::MAX);
        assert_eq!(huge.saturating_add(&Money::usd(1)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::sum(vec![Money::usd(100), Money::usd(250)], Currency::USD);
        assert_eq!(total, Money::usd(350));
        assert!(Money::sum(Vec::new(), Currency::USD).is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
