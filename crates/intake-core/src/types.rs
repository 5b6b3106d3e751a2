//! # Domain Types
//!
//! Value types shared by the validators.
//!
//! ```text
//! ┌─────────────────────┐   ┌─────────────────────┐   ┌─────────────────────┐
//! │    DiscountRate     │   │       Coupon        │   │    CountryCode      │
//! │  ─────────────────  │   │  ─────────────────  │   │  ─────────────────  │
//! │  bps (u32)          │◄──│  code (String)      │   │  US → drives at 16  │
//! │  1000 = 10%         │   │  discount           │   │  UK → drives at 17  │
//! └─────────────────────┘   └─────────────────────┘   └─────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount expressed in basis points (1 bps = 0.01%).
///
/// Valid rates lie in `[0, 10000]`, i.e. 0% to 100%. Construction clamps to
/// that range so a rate can never push a price below zero.
///
/// On the wire a rate is a fraction in `[0, 1]` (`0.1` for 10%). Anything
/// outside that range, or not finite, fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% off.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a rate from basis points, clamped to 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > Self::MAX_BPS {
            DiscountRate(Self::MAX_BPS)
        } else {
            DiscountRate(bps)
        }
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a fraction in `[0, 1]`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / Self::MAX_BPS as f64
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ValidationError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 1,
            });
        }

        Ok(DiscountRate::from_bps((fraction * Self::MAX_BPS as f64).round() as u32))
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> f64 {
        rate.fraction()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 as f64 / 100.0)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A catalog entry: a unique, case-sensitive code and the discount it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    pub code: String,
    /// Serialized as a fraction in `[0, 1]`.
    #[ts(type = "number")]
    pub discount: DiscountRate,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: DiscountRate) -> Self {
        Coupon {
            code: code.into(),
            discount,
        }
    }
}

// =============================================================================
// Country Code
// =============================================================================

/// Countries with a known minimum driving age.
///
/// Parsing is exact and case-sensitive: `"US"` is known, `"us"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CountryCode {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
}

impl CountryCode {
    /// Every supported country, in display order.
    pub const ALL: [CountryCode; 2] = [CountryCode::Us, CountryCode::Uk];

    /// The two-letter code as written on input.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Uk => "UK",
        }
    }

    /// Minimum legal age to hold a driving licence.
    pub const fn min_driving_age(&self) -> i64 {
        match self {
            CountryCode::Us => 16,
            CountryCode::Uk => 17,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "country code".to_string(),
                allowed: CountryCode::ALL
                    .iter()
                    .map(|country| country.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
