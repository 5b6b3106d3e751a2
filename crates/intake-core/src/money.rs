//! # Money Module
//!
//! Prices handled by the validators are integer cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A 10% coupon on $10.00                                                 │
//! │                                                                         │
//! │  Floating point:  10.0 * (1.0 - 0.1) = 9.000000000000002  ❌            │
//! │  Integer cents:   1000 - (1000 * 1000 + 5000) / 10000 = 900  ✅         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Floats only appear at the edge, when a dynamic payload carries a price in
//! major units; [`Money::from_major_f64`] converts it once and everything after
//! that is integer math.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed, so a caller can represent refunds; the discount calculator rejects
/// negative prices before any math runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use intake_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Converts a price given in major units (e.g. `9.99`) to cents.
    ///
    /// Rounds once, half away from zero, on the scaled binary value. Returns
    /// `None` for NaN, infinities and values that don't fit in an `i64` of
    /// cents.
    ///
    /// ## Example
    /// ```rust
    /// use intake_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(10.0), Some(Money::from_cents(1000)));
    /// assert_eq!(Money::from_major_f64(0.1049), Some(Money::from_cents(10)));
    /// assert_eq!(Money::from_major_f64(f64::NAN), None);
    /// ```
    pub fn from_major_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        // 2^63 is exactly representable; i64::MAX as f64 rounds up to it.
        if cents < -9_223_372_036_854_775_808.0 || cents >= 9_223_372_036_854_775_808.0 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the price after taking `rate` off.
    ///
    /// The discount amount is rounded half-up to the nearest cent before it is
    /// subtracted, so the customer never pays a fraction of a cent.
    ///
    /// ## Example
    /// ```rust
    /// use intake_core::money::Money;
    /// use intake_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(1000);
    /// let rate = DiscountRate::from_bps(2000); // 20%
    /// assert_eq!(price.apply_discount(rate).cents(), 800);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let discount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        *self - Money(discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$10.99` rendering. UI code should format for its locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
