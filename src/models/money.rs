//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact sums.
//! On the wire an amount is a plain JSON number in currency units (`25.5`),
//! which keeps stored ledgers readable and compatible with older files.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Largest accepted amount, in cents (10 billion currency units)
///
/// Millions of transactions at this size still sum within `i64`, so ledger
/// totals never overflow.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use my_finances::models::Money;
    /// let amount = Money::from_cents(2550); // $25.50
    /// assert_eq!(amount.to_string(), "$25.50");
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

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount in currency units as a float, for export and serialization only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a float in currency units to the nearest cent
    ///
    /// Rejects NaN, infinities and values beyond [`MAX_AMOUNT_CENTS`].
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_AMOUNT_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Whether a float in currency units has a nonzero part below one cent
    ///
    /// Float noise such as `0.1 + 0.2` does not count.
    pub fn has_sub_cent_part(value: f64) -> bool {
        let scaled = value * 100.0;
        (scaled - scaled.round()).abs() > 1e-6
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "25.50", "-25.50", "$25.50", "25", "25.5", ".5".
    /// At most two fractional digits are allowed, and the magnitude may not
    /// exceed [`MAX_AMOUNT_CENTS`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_digits(whole) {
            return Err(invalid());
        }

        let cents_part = match fraction {
            None => 0,
            Some(fraction) => {
                if !is_digits(fraction) {
                    return Err(invalid());
                }
                match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => fraction.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(MoneyParseError::TooManyDecimals(
                            original.trim().to_string(),
                        ))
                    }
                }
            }
        };

        // Need at least one digit somewhere: rejects "", ".", "$"
        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(original.trim().to_string()))?
        };

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .filter(|c| *c <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(original.trim().to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).map_err(de::Error::custom)
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

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("At most two decimal places are allowed: {0}")]
    TooManyDecimals(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),

    #[error("Amount must not be negative: {0}")]
    Negative(String),
}
