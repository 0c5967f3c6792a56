//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a bill in floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are parsed from text straight into cents, and every line     │
//! │    total and bill total is integer arithmetic.                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Or parse operator / file input
//! let parsed: Money = "10.99".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! // Checked arithmetic: overflow is reported, never wrapped
//! let line = price.checked_mul_quantity(2).unwrap();           // 21.98
//! let total = line.checked_add(Money::from_cents(500)).unwrap(); // 26.98
//! assert_eq!(total.cents(), 2698);
//! assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::DEFAULT_CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic never has to special-case a subtraction
///   that dips below zero; prices themselves are validated non-negative.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// inventory.txt "50.0" ──► Product.price ──► LineItem.line_total ──► Bill.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, or `None` if the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(5000); // 50.00
    /// let line_total = unit_price.checked_mul_quantity(4).unwrap();
    /// assert_eq!(line_total.cents(), 20000); // 200.00
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the sum does not fit.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats with a caller-chosen currency symbol, e.g. `Rs.12.50`.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-1250).format_with_symbol("Rs."), "-Rs.12.50");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.abs_decimal())
    }

    fn abs_decimal(&self) -> String {
        format!("{}.{:02}", self.dollars().abs(), self.cents_part())
    }

    /// Plain decimal text without a currency symbol, e.g. `12.50`.
    ///
    /// Parses back to the same value with [`str::parse`].
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}", sign, self.abs_decimal())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `50`, `50.0`, `12.99` or `-3.5`.
///
/// ## Rules
/// - Optional leading `-`
/// - At least one digit before the point
/// - If a point is present, one or two digits after it
///
/// Anything else (including a third fractional digit) is rejected rather
/// than rounded, so a price never silently changes.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (digits, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number like 12.99"));
        }

        let minor = match frac {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 => {
                return Err(invalid("expected one or two digits after the decimal point"));
            }
            Some(f) if !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid("expected a decimal number like 12.99"));
            }
            // "5" after the point is fifty cents, not five
            Some(f) if f.len() == 1 => i64::from(f.as_bytes()[0] - b'0') * 10,
            Some(f) => f
                .parse::<i64>()
                .map_err(|_| invalid("expected a decimal number like 12.99"))?,
        };

        let cents = whole
            .parse::<i64>()
            .ok()
            .and_then(|major| major.checked_mul(100))
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `RS. 12.34`.
///
/// The console formats with the configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
