//! # intake-core: Pure Input Validation
//!
//! Validation rules, coupon pricing and a checked stack, as pure functions
//! with no I/O beyond reading an optional rules file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller (UI bridge, HTTP handler, script)                               │
//! │       │ raw JSON                      │ typed values                    │
//! │       ▼                               ▼                                 │
//! │  ┌───────────┐                 ┌─────────────┐   ┌───────────┐          │
//! │  │ boundary  │ ──shape ok────► │ validation  │   │   stack   │          │
//! │  │ (Value)   │                 │ discount    │   │  Stack<T> │          │
//! │  └───────────┘                 └──────┬──────┘   └───────────┘          │
//! │                                       │                                 │
//! │                          ┌────────────┼────────────┐                    │
//! │                          ▼            ▼            ▼                    │
//! │                       config        money        types                  │
//! │                    RulesConfig      Money    Coupon, CountryCode        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Range, length and eligibility checks
//! - [`discount`] - Coupon catalog and pricing
//! - [`boundary`] - Shape checks for untyped (JSON) input
//! - [`stack`] - LIFO container with checked reads
//! - [`money`] - Integer-cent money type
//! - [`types`] - Coupon, DiscountRate, CountryCode
//! - [`config`] - Configurable bounds (TOML + environment)
//! - [`error`] - Error types
//! - [`intro`] - Arithmetic helpers
//!
//! ## Design Principles
//!
//! 1. **Total validators**: bad input comes back as a value, never a panic
//! 2. **Integer money**: prices are cents
//! 3. **Immutable tables**: coupons and driving ages are fixed data
//!
//! ## Example Usage
//!
//! ```rust
//! use intake_core::{calculate_discount, validate_user_input, Money};
//!
//! let report = validate_user_input("abc", 18);
//! assert!(report.is_success());
//!
//! let total = calculate_discount(Money::from_dollars(10), "SAVE20").unwrap();
//! assert_eq!(total, Money::from_dollars(8));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod boundary;
pub mod config;
pub mod discount;
pub mod error;
pub mod intro;
pub mod money;
pub mod stack;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::RulesConfig;
pub use discount::{calculate_discount, find_coupon, get_coupons};
pub use error::{ConfigError, StackError, ValidationError};
pub use money::Money;
pub use stack::Stack;
pub use types::*;
pub use validation::{
    can_drive, is_price_in_range, is_valid_username, validate_user_input, ValidationReport,
};
